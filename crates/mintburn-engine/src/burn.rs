//! Session burn: discount redemption plus the flat access fee.
//!
//! Unlike minting, every discount in the session settles at one token
//! price snapshot taken after the session's mint.

use mintburn_core::types::{Currency, SystemParams, Tokens, UserInputs};

use crate::formula::discount_percent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnOutcome {
    /// Tokens burned this session, access fee included.
    pub total_burned: Tokens,
    pub discount_percent: f64,
    /// Discount redeemed across all purchases.
    pub discount_in_currency: Currency,
    pub burn_for_discount: Tokens,
    pub access_fee_tokens: Tokens,
}

/// Total tokens burned for the session at `token_price`.
pub fn compute_burned_tokens(
    inputs: &UserInputs,
    params: &SystemParams,
    market_burned_this_year: Tokens,
    token_price: Currency,
) -> BurnOutcome {
    let discount = discount_percent(market_burned_this_year, params);

    let (discount_in_currency, burn_for_discount) = (0..inputs.number_of_purchases).fold(
        (0.0, 0.0),
        |(currency, tokens): (Currency, Tokens), _| {
            let discount_in_currency = inputs.purchase_price * discount;
            (
                currency + discount_in_currency,
                tokens + discount_in_currency / token_price,
            )
        },
    );

    BurnOutcome {
        total_burned: burn_for_discount + params.access_fee,
        discount_percent: discount,
        discount_in_currency,
        burn_for_discount,
        access_fee_tokens: params.access_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(price: f64, n: u32) -> UserInputs {
        UserInputs {
            purchase_price: price,
            number_of_purchases: n,
            ..UserInputs::default()
        }
    }

    #[test]
    fn burn_per_purchase_at_fixed_price() {
        let p = SystemParams::default();
        let out = compute_burned_tokens(&inputs(1_000.0, 4), &p, 0.0, 2.0);
        // 1000 * 0.10 / 2.0 = 50 tokens per purchase
        assert!((out.burn_for_discount - 200.0).abs() < 1e-9);
        assert!((out.discount_in_currency - 400.0).abs() < 1e-9);
        assert_eq!(out.total_burned, out.burn_for_discount + p.access_fee);
    }

    #[test]
    fn no_purchases_burns_access_fee_only() {
        let p = SystemParams::default();
        let out = compute_burned_tokens(&inputs(1_000.0, 0), &p, 0.0, 1.0);
        assert_eq!(out.total_burned, p.access_fee);
        assert_eq!(out.burn_for_discount, 0.0);
    }

    #[test]
    fn exhausted_discount_burns_access_fee_only() {
        let p = SystemParams::default();
        let out = compute_burned_tokens(&inputs(1_000.0, 3), &p, p.burn_cap, 1.0);
        assert_eq!(out.discount_percent, 0.0);
        assert_eq!(out.total_burned, p.access_fee);
    }

    #[test]
    fn access_fee_does_not_depend_on_price() {
        let p = SystemParams::default();
        let cheap = compute_burned_tokens(&inputs(0.0, 1), &p, 0.0, 1.0);
        let dear = compute_burned_tokens(&inputs(0.0, 1), &p, 0.0, 1_000.0);
        assert_eq!(cheap.total_burned, dear.total_burned);
    }
}
