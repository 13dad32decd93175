use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MintburnError {
    // ── User input errors ────────────────────────────────────────────────────
    #[error("purchase price must be zero or greater, got {0}")]
    PurchasePriceNegative(f64),

    #[error("number of purchases must be at least 1")]
    NoPurchases,

    #[error("period must be zero or greater, got {0}")]
    PeriodNegative(f64),

    #[error("review quality must be between 0 and 1, got {0}")]
    ReviewQualityOutOfRange(f64),

    #[error("return probability must be between 0 and 1, got {0}")]
    ReturnProbabilityOutOfRange(f64),

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    // ── Parameter errors ─────────────────────────────────────────────────────
    #[error("parameter {name} must be strictly positive, got {value}")]
    NonPositiveParam { name: &'static str, value: f64 },

    #[error("parameter {name} must not be negative, got {value}")]
    NegativeParam { name: &'static str, value: f64 },

    #[error("invalid market assumption: {0}")]
    InvalidAssumption(String),

    // ── Configuration ────────────────────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),
}
