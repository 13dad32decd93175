use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::MintburnError;

/// Token amount (whole tokens, fractional allowed).
pub type Tokens = f64;

/// Amount in the store's currency.
pub type Currency = f64;

// ── SystemParams ─────────────────────────────────────────────────────────────

/// Fixed economic constants of the protocol.
///
/// The engine treats these as immutable for the duration of a computation.
/// `Default` yields the reference parameter set from [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemParams {
    /// Cashback fraction at launch.
    pub cb_base: f64,
    /// Cashback decay per period since launch.
    pub alpha: f64,
    /// Maximum quality bonus.
    pub beta: f64,
    /// Diminishing-returns steepness.
    pub gamma: f64,
    /// Bonding-curve floor price.
    pub p0: f64,
    /// Bonding-curve convexity.
    pub k: f64,
    /// Discount fraction at zero market burn.
    pub discount_base: f64,
    /// Discount decay relative to `burn_cap`.
    pub theta: f64,
    /// Annual market-wide burn cap (tokens).
    pub burn_cap: f64,
    /// Flat per-session burn (tokens).
    pub access_fee: f64,
    /// Per-user mint scale for diminishing returns.
    pub user_cap: f64,
    /// Launch period. May be any real number.
    pub t_launch: f64,
}

impl Default for SystemParams {
    fn default() -> Self {
        Self {
            cb_base: DEFAULT_CB_BASE,
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            gamma: DEFAULT_GAMMA,
            p0: DEFAULT_P0,
            k: DEFAULT_K,
            discount_base: DEFAULT_DISCOUNT_BASE,
            theta: DEFAULT_THETA,
            burn_cap: DEFAULT_BURN_CAP,
            access_fee: DEFAULT_ACCESS_FEE,
            user_cap: DEFAULT_USER_CAP,
            t_launch: DEFAULT_T_LAUNCH,
        }
    }
}

impl SystemParams {
    /// Check that the parameter set is usable.
    ///
    /// Every field must be finite and non-negative (except `t_launch`), and
    /// the three divisors (`p0`, `user_cap`, `burn_cap`) must be strictly
    /// positive. The engine itself never calls this; it is for whoever
    /// supplies the parameters.
    pub fn validate(&self) -> Result<(), MintburnError> {
        let non_negative = [
            ("cb_base", self.cb_base),
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
            ("k", self.k),
            ("discount_base", self.discount_base),
            ("theta", self.theta),
            ("access_fee", self.access_fee),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() {
                return Err(MintburnError::NotFinite { field: name });
            }
            if value < 0.0 {
                return Err(MintburnError::NegativeParam { name, value });
            }
        }

        let positive = [
            ("p0", self.p0),
            ("burn_cap", self.burn_cap),
            ("user_cap", self.user_cap),
        ];
        for (name, value) in positive {
            if !value.is_finite() {
                return Err(MintburnError::NotFinite { field: name });
            }
            if value <= 0.0 {
                return Err(MintburnError::NonPositiveParam { name, value });
            }
        }

        if !self.t_launch.is_finite() {
            return Err(MintburnError::NotFinite { field: "t_launch" });
        }
        Ok(())
    }
}

// ── UserInputs ───────────────────────────────────────────────────────────────

/// One user's purchase behavior for a single calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserInputs {
    /// Price of each purchase (currency).
    pub purchase_price: Currency,
    /// Purchases made in the session.
    pub number_of_purchases: u32,
    /// Periods since the epoch; truncated to an integer by the engine.
    pub period: f64,
    /// Review quality in [0, 1].
    pub review_quality: f64,
    /// Probability the goods are returned, in [0, 1].
    pub return_probability: f64,
}

impl Default for UserInputs {
    fn default() -> Self {
        Self {
            purchase_price: 1_000.0,
            number_of_purchases: 1,
            period: 0.0,
            review_quality: 0.8,
            return_probability: 0.1,
        }
    }
}

impl UserInputs {
    /// Reject inputs outside their documented domains.
    pub fn validate(&self) -> Result<(), MintburnError> {
        let fields = [
            ("purchase_price", self.purchase_price),
            ("period", self.period),
            ("review_quality", self.review_quality),
            ("return_probability", self.return_probability),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(MintburnError::NotFinite { field });
            }
        }

        if self.purchase_price < 0.0 {
            return Err(MintburnError::PurchasePriceNegative(self.purchase_price));
        }
        if self.number_of_purchases == 0 {
            return Err(MintburnError::NoPurchases);
        }
        if self.period < 0.0 {
            return Err(MintburnError::PeriodNegative(self.period));
        }
        if !(0.0..=1.0).contains(&self.review_quality) {
            return Err(MintburnError::ReviewQualityOutOfRange(self.review_quality));
        }
        if !(0.0..=1.0).contains(&self.return_probability) {
            return Err(MintburnError::ReturnProbabilityOutOfRange(
                self.return_probability,
            ));
        }
        Ok(())
    }

    /// Pull every field back into its domain instead of failing.
    ///
    /// Non-finite values fall back to the domain's lower bound.
    pub fn clamped(&self) -> Self {
        fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
            if value.is_nan() {
                lo
            } else {
                value.clamp(lo, hi)
            }
        }

        Self {
            purchase_price: if self.purchase_price.is_finite() {
                self.purchase_price.max(0.0)
            } else {
                0.0
            },
            number_of_purchases: self.number_of_purchases.max(1),
            period: if self.period.is_finite() {
                self.period.max(0.0)
            } else {
                0.0
            },
            review_quality: clamp(self.review_quality, 0.0, 1.0),
            return_probability: clamp(self.return_probability, 0.0, 1.0),
        }
    }

    /// The integer period used by the formulas.
    pub fn period_index(&self) -> f64 {
        self.period.trunc()
    }

    /// Total currency spent across the session, before discounts.
    pub fn gross_spend(&self) -> Currency {
        self.purchase_price * self.number_of_purchases as f64
    }
}

// ── MarketAssumptions ────────────────────────────────────────────────────────

/// Stand-in for market state the calculator cannot observe.
///
/// The engine assumes `assumed_users` other participants behave exactly
/// like the modeled user. Passed explicitly so each call starts from the
/// same baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketAssumptions {
    pub assumed_users: f64,
    pub assumed_burn_rate: f64,
    pub initial_global_minted: Tokens,
}

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self {
            assumed_users: ASSUMED_USERS,
            assumed_burn_rate: ASSUMED_BURN_RATE,
            initial_global_minted: INITIAL_GLOBAL_MINTED,
        }
    }
}

impl MarketAssumptions {
    pub fn validate(&self) -> Result<(), MintburnError> {
        if !self.assumed_users.is_finite() || self.assumed_users < 0.0 {
            return Err(MintburnError::InvalidAssumption(format!(
                "assumed_users must be a non-negative number, got {}",
                self.assumed_users
            )));
        }
        if !(0.0..=1.0).contains(&self.assumed_burn_rate) {
            return Err(MintburnError::InvalidAssumption(format!(
                "assumed_burn_rate must be between 0 and 1, got {}",
                self.assumed_burn_rate
            )));
        }
        if !self.initial_global_minted.is_finite() || self.initial_global_minted < 0.0 {
            return Err(MintburnError::InvalidAssumption(format!(
                "initial_global_minted must be a non-negative number, got {}",
                self.initial_global_minted
            )));
        }
        Ok(())
    }
}
