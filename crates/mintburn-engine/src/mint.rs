//! Per-purchase mint accumulation.
//!
//! Every purchase in a session happens at the same integer period, but
//! each one sees the user's and the market's cumulative mint as updated
//! by the purchases before it: the diminishing factor shrinks and the
//! token price rises as the session progresses. Collapsing the loop into
//! a single multiplication would overstate emission.

use mintburn_core::constants::MAX_RECORDED_PURCHASES;
use mintburn_core::results::PurchaseMint;
use mintburn_core::types::{SystemParams, Tokens, UserInputs};
use tracing::trace;

use crate::formula::{cashback_percent, diminishing_factor, quality_factor, token_price};

/// Outcome of the mint loop for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct MintOutcome {
    pub total_minted_user: Tokens,
    /// Global supply after this user's purchases only.
    pub new_global_total_minted: Tokens,
    pub df_at_first_purchase: f64,
    pub df_at_last_purchase: f64,
    /// 0 for a session with no purchases.
    pub minted_per_purchase_average: Tokens,
    pub cashback_percent: f64,
    pub quality_factor: f64,
    /// At most `MAX_RECORDED_PURCHASES` records.
    pub purchases: Vec<PurchaseMint>,
    pub purchases_omitted: u32,
}

/// Run the mint loop, starting the market at `global_total_minted_before`.
pub fn compute_minted_tokens(
    inputs: &UserInputs,
    params: &SystemParams,
    global_total_minted_before: Tokens,
) -> MintOutcome {
    let t = inputs.period_index();
    let cb = cashback_percent(t, params);
    let qf = quality_factor(inputs.return_probability, inputs.review_quality, params);
    let df_at_first_purchase = diminishing_factor(0.0, params);

    let n = inputs.number_of_purchases;
    let (user_total, global_total, purchases) = (0..n).fold(
        (
            0.0,
            global_total_minted_before,
            Vec::with_capacity(n.min(MAX_RECORDED_PURCHASES) as usize),
        ),
        |(user, global, mut purchases): (Tokens, Tokens, Vec<PurchaseMint>), index| {
            let df = diminishing_factor(user, params);
            let price = token_price(global, params);
            let minted = inputs.purchase_price * cb * qf * df / price;

            let user = user + minted;
            let global = global + minted;
            trace!(index, df, price, minted, "purchase minted");

            if index < MAX_RECORDED_PURCHASES {
                purchases.push(PurchaseMint {
                    index,
                    diminishing_factor: df,
                    token_price: price,
                    minted,
                    user_cumulative: user,
                    global_cumulative: global,
                });
            }
            (user, global, purchases)
        },
    );

    let minted_per_purchase_average = if n == 0 { 0.0 } else { user_total / n as f64 };

    MintOutcome {
        total_minted_user: user_total,
        new_global_total_minted: global_total,
        df_at_first_purchase,
        df_at_last_purchase: diminishing_factor(user_total, params),
        minted_per_purchase_average,
        cashback_percent: cb,
        quality_factor: qf,
        purchases_omitted: n.saturating_sub(MAX_RECORDED_PURCHASES),
        purchases,
    }
}
