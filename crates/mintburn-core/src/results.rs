//! Output records produced by the engine.
//!
//! A `Results` is always fully populated; nothing here is optional.

use serde::{Deserialize, Serialize};

use crate::types::{Currency, Tokens};

/// Headline figures for one calculation, plus the full breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub total_minted_user: Tokens,
    /// Token price after the session, on the approximated global supply.
    pub token_price: Currency,
    pub total_burned: Tokens,
    pub burn_destroyed: Tokens,
    pub burn_redistributed: Tokens,
    /// Minted minus burned. Negative when the user burns more than they mint.
    pub net_tokens: Tokens,
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub mint: MintBreakdown,
    pub burn: BurnBreakdown,
    pub interpretation: Interpretation,
    pub assumptions: AssumptionsBreakdown,
}

/// State of the mint loop at a single purchase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchaseMint {
    /// 0-based purchase index.
    pub index: u32,
    pub diminishing_factor: f64,
    /// Price the purchase was minted at.
    pub token_price: Currency,
    pub minted: Tokens,
    /// User total including this purchase.
    pub user_cumulative: Tokens,
    /// Session global total including this purchase.
    pub global_cumulative: Tokens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintBreakdown {
    pub cashback_percent: f64,
    pub quality_factor: f64,
    pub df_at_first_purchase: f64,
    /// Factor a further purchase would get. Diagnostic only.
    pub df_at_last_purchase: f64,
    pub minted_per_purchase_average: Tokens,
    /// total_minted_user / user_cap.
    pub cap_usage: f64,
    /// Global supply at the end of the mint loop (this user only).
    pub session_global_minted: Tokens,
    /// The first `MAX_RECORDED_PURCHASES` purchases, in order.
    pub purchases: Vec<PurchaseMint>,
    /// Purchases minted but not recorded in `purchases`.
    pub purchases_omitted: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurnBreakdown {
    pub discount_percent: f64,
    /// Discount across all purchases, in currency.
    pub discount_in_currency: Currency,
    pub burn_for_discount: Tokens,
    pub access_fee_tokens: Tokens,
}

/// Token figures restated in currency at the post-session price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// purchase_price × number_of_purchases.
    pub gross_spend: Currency,
    /// Gross spend less the discount redeemed.
    pub effective_spend: Currency,
    pub minted_value: Currency,
    pub burned_value: Currency,
    pub net_value: Currency,
    /// minted_value / gross_spend, or 0 when nothing was spent.
    pub effective_cashback_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssumptionsBreakdown {
    pub assumed_users: f64,
    pub assumed_burn_rate: f64,
    pub initial_global_minted: Tokens,
    pub new_global_total_minted: Tokens,
    pub market_burned_this_year: Tokens,
}
