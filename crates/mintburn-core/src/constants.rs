/// ─── Mintburn Protocol Constants ────────────────────────────────────────────
///
/// Default economic constants for the purchase-cashback token model.
/// Currency amounts are in the store's currency (rubles in the reference
/// deployment); token amounts are whole-token floats.

// ── Cashback (mint) ──────────────────────────────────────────────────────────

/// Cashback fraction paid at launch (5%).
pub const DEFAULT_CB_BASE: f64 = 0.05;

/// Linear cashback decay per period elapsed since launch.
pub const DEFAULT_ALPHA: f64 = 0.01;

/// Maximum quality bonus: the quality factor ranges over [1, 1 + beta].
pub const DEFAULT_BETA: f64 = 0.3;

/// Steepness of the per-user diminishing-returns curve.
pub const DEFAULT_GAMMA: f64 = 1.0;

/// Per-user mint scale. A user who has minted `user_cap` tokens gets
/// exp(-gamma) of the full reward on the next purchase.
pub const DEFAULT_USER_CAP: f64 = 10_000.0;

/// Launch period. Periods are counted from here.
pub const DEFAULT_T_LAUNCH: f64 = 0.0;

// ── Bonding curve ────────────────────────────────────────────────────────────

/// Floor token price (currency per token) at zero supply.
pub const DEFAULT_P0: f64 = 1.0;

/// Convexity of the quadratic bonding curve P0 · (1 + k · S²).
/// With the default, price doubles at a global supply of 1,000,000 tokens.
pub const DEFAULT_K: f64 = 1e-12;

// ── Discount (burn) ──────────────────────────────────────────────────────────

/// Discount fraction available while market-wide burn is zero (10%).
pub const DEFAULT_DISCOUNT_BASE: f64 = 0.10;

/// Discount decay relative to the annual burn cap.
pub const DEFAULT_THETA: f64 = 1.0;

/// Annual market-wide burn cap (tokens).
pub const DEFAULT_BURN_CAP: f64 = 10_000_000.0;

/// Flat per-session access fee, denominated in tokens.
pub const DEFAULT_ACCESS_FEE: f64 = 1.0;

// ── Burn split ───────────────────────────────────────────────────────────────

/// Share of every burn that is destroyed outright.
pub const BURN_DESTROY_SHARE: f64 = 0.7;

/// Share of every burn redistributed to sellers.
pub const BURN_REDISTRIBUTE_SHARE: f64 = 0.3;

// ── Assumed market ───────────────────────────────────────────────────────────

/// Number of similar participants assumed to mint alongside the modeled user.
pub const ASSUMED_USERS: f64 = 1_000.0;

/// Fraction of minted supply assumed burned market-wide per period.
pub const ASSUMED_BURN_RATE: f64 = 0.1;

/// Global token supply before the modeled session.
pub const INITIAL_GLOBAL_MINTED: f64 = 1_000_000.0;

// ── Diagnostics ──────────────────────────────────────────────────────────────

/// Per-purchase mint records kept in a result. Purchases past this many are
/// still minted but only counted.
pub const MAX_RECORDED_PURCHASES: u32 = 1_000;
