//! Closed-form economic formulas.
//!
//!   cashback(t)        = max(0, CB_base · (1 − α · (t − t_launch)))
//!   quality(r, q)      = 1 + β · (1 − r) · q
//!   diminishing(m)     = exp(−γ · m / user_cap)
//!   price(S)           = P0 · (1 + k · S²)
//!   discount(B)        = max(0, discount_base · (1 − θ · B / burn_cap))
//!
//! All functions are total. Out-of-domain arguments give out-of-domain
//! results (or NaN/∞ for zero divisors) rather than errors; the lower
//! clamps on cashback and discount are the only guards.

use mintburn_core::types::{Currency, SystemParams, Tokens};

/// Cashback fraction at integer period `t`.
pub fn cashback_percent(t: f64, params: &SystemParams) -> f64 {
    (params.cb_base * (1.0 - params.alpha * (t - params.t_launch))).max(0.0)
}

/// Reward multiplier in [1, 1 + beta] for in-domain arguments.
pub fn quality_factor(return_probability: f64, review_quality: f64, params: &SystemParams) -> f64 {
    1.0 + params.beta * (1.0 - return_probability) * review_quality
}

/// Anti-whale multiplier; 1 at zero mint, decays towards 0.
pub fn diminishing_factor(user_minted_so_far: Tokens, params: &SystemParams) -> f64 {
    (-params.gamma * user_minted_so_far / params.user_cap).exp()
}

/// Quadratic bonding curve. Never below `p0` for k >= 0.
pub fn token_price(total_global_minted: Tokens, params: &SystemParams) -> Currency {
    params.p0 * (1.0 + params.k * total_global_minted * total_global_minted)
}

/// Discount fraction given the market-wide burn so far this year.
pub fn discount_percent(burned_this_year: Tokens, params: &SystemParams) -> f64 {
    (params.discount_base * (1.0 - params.theta * burned_this_year / params.burn_cap)).max(0.0)
}
