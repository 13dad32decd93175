//! Approximated market-wide supply and burn.
//!
//! There is no shared ledger behind the calculator. The market is modeled
//! as `assumed_users` participants who each mint exactly what the modeled
//! user minted this period.

use mintburn_core::types::{MarketAssumptions, Tokens};

/// Global supply after everyone in the assumed market has minted.
pub fn new_global_total_minted(total_minted_user: Tokens, market: &MarketAssumptions) -> Tokens {
    market.initial_global_minted + total_minted_user * market.assumed_users
}

/// Market-wide burn this year, used as the input to discount degradation.
pub fn market_burned_this_year(total_minted_user: Tokens, market: &MarketAssumptions) -> Tokens {
    total_minted_user * market.assumed_burn_rate * market.assumed_users
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supply_scales_with_assumed_users() {
        let market = MarketAssumptions {
            assumed_users: 100.0,
            assumed_burn_rate: 0.1,
            initial_global_minted: 5_000.0,
        };
        assert_eq!(new_global_total_minted(0.0, &market), 5_000.0);
        assert_eq!(new_global_total_minted(10.0, &market), 6_000.0);
        assert_eq!(market_burned_this_year(10.0, &market), 100.0);
    }

    #[test]
    fn solitary_market() {
        let market = MarketAssumptions {
            assumed_users: 0.0,
            ..MarketAssumptions::default()
        };
        assert_eq!(
            new_global_total_minted(123.0, &market),
            market.initial_global_minted
        );
        assert_eq!(market_burned_this_year(123.0, &market), 0.0);
    }
}
