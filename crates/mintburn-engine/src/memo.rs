use mintburn_core::results::Results;
use mintburn_core::types::UserInputs;
use tracing::trace;

use crate::compose::TokenomicsEngine;

/// Recompute only when the inputs change.
///
/// Intended for interactive front ends that re-invoke the engine on every
/// form event. Inputs containing NaN never compare equal and are always
/// recomputed.
#[derive(Debug, Clone)]
pub struct MemoizedEngine {
    engine: TokenomicsEngine,
    last: Option<(UserInputs, Results)>,
    hits: u64,
    misses: u64,
}

impl MemoizedEngine {
    pub fn new(engine: TokenomicsEngine) -> Self {
        Self {
            engine,
            last: None,
            hits: 0,
            misses: 0,
        }
    }

    pub fn engine(&self) -> &TokenomicsEngine {
        &self.engine
    }

    pub fn compute(&mut self, inputs: &UserInputs) -> &Results {
        if matches!(&self.last, Some((prev, _)) if prev == inputs) {
            self.hits += 1;
            trace!(hits = self.hits, "memoized result reused");
        } else {
            self.misses += 1;
            self.last = None;
        }
        let engine = &self.engine;
        &self
            .last
            .get_or_insert_with(|| (*inputs, engine.compute(inputs)))
            .1
    }

    /// Swap the engine; the cached result belongs to the old one and is dropped.
    pub fn set_engine(&mut self, engine: TokenomicsEngine) {
        if engine != self.engine {
            self.engine = engine;
            self.last = None;
        }
    }

    /// (cache hits, recomputations)
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintburn_core::types::{MarketAssumptions, SystemParams};

    #[test]
    fn unchanged_inputs_hit_cache() {
        let mut memo = MemoizedEngine::new(TokenomicsEngine::default());
        let inputs = UserInputs::default();
        let first = memo.compute(&inputs).clone();
        let second = memo.compute(&inputs).clone();
        assert_eq!(first, second);
        assert_eq!(memo.stats(), (1, 1));
    }

    #[test]
    fn changed_inputs_recompute() {
        let mut memo = MemoizedEngine::new(TokenomicsEngine::default());
        let a = UserInputs::default();
        let b = UserInputs { number_of_purchases: 3, ..a };
        let ra = memo.compute(&a).total_minted_user;
        let rb = memo.compute(&b).total_minted_user;
        assert!(rb > ra);
        assert_eq!(memo.stats(), (0, 2));
    }

    #[test]
    fn new_engine_invalidates() {
        let mut memo = MemoizedEngine::new(TokenomicsEngine::default());
        let inputs = UserInputs::default();
        let before = memo.compute(&inputs).total_minted_user;

        let richer = SystemParams { cb_base: 0.10, ..SystemParams::default() };
        memo.set_engine(TokenomicsEngine::new(richer, MarketAssumptions::default()));
        let after = memo.compute(&inputs).total_minted_user;
        assert!(after > before);
        assert_eq!(memo.stats(), (0, 2));
    }
}
