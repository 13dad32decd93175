//! mintburn-engine
//!
//! The tokenomics simulation: a pure function from a user's purchase
//! behavior and the protocol parameters to minted, burned and priced
//! token figures, with a full breakdown of intermediate values.
//!
//! Nothing here performs I/O or keeps state between calls. Callers are
//! expected to validate inputs first (see `UserInputs::validate`); the
//! engine computes with whatever it is given.

pub mod burn;
pub mod compose;
pub mod formula;
pub mod market;
pub mod memo;
pub mod mint;
pub mod series;

pub use burn::{compute_burned_tokens, BurnOutcome};
pub use compose::{compute, compute_with_market, split_burn, TokenomicsEngine};
pub use memo::MemoizedEngine;
pub use mint::{compute_minted_tokens, MintOutcome};
pub use series::SeriesPoint;
