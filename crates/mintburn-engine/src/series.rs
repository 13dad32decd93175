//! Chart data for the calculator's plots.
//!
//! Each generator samples one formula over an evenly spaced range and
//! returns `(x, y)` points ready for plotting.

use serde::{Deserialize, Serialize};

use mintburn_core::types::{SystemParams, Tokens};

use crate::formula::{cashback_percent, diminishing_factor, discount_percent, token_price};
use crate::mint::MintOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

/// `steps + 1` evenly spaced x values over [0, to]. A single 0 when `steps == 0`.
fn sample_points(to: f64, steps: usize) -> impl Iterator<Item = f64> {
    (0..=steps).map(move |i| {
        if steps == 0 {
            0.0
        } else {
            to * i as f64 / steps as f64
        }
    })
}

fn sample(to: f64, steps: usize, f: impl Fn(f64) -> f64) -> Vec<SeriesPoint> {
    sample_points(to, steps)
        .map(|x| SeriesPoint { x, y: f(x) })
        .collect()
}

/// Token price against global supply.
pub fn price_curve(params: &SystemParams, max_supply: Tokens, steps: usize) -> Vec<SeriesPoint> {
    sample(max_supply, steps, |s| token_price(s, params))
}

/// Cashback for each integer period from the first one at or after launch,
/// through `periods` periods after it.
pub fn cashback_schedule(params: &SystemParams, periods: u32) -> Vec<SeriesPoint> {
    let first = params.t_launch.ceil();
    (0..=periods)
        .map(|i| {
            let t = first + i as f64;
            SeriesPoint {
                x: t,
                y: cashback_percent(t, params),
            }
        })
        .collect()
}

/// Diminishing factor against the user's cumulative mint.
pub fn diminishing_curve(
    params: &SystemParams,
    max_user_mint: Tokens,
    steps: usize,
) -> Vec<SeriesPoint> {
    sample(max_user_mint, steps, |m| diminishing_factor(m, params))
}

/// Discount against market-wide burn this year.
pub fn discount_curve(params: &SystemParams, max_burned: Tokens, steps: usize) -> Vec<SeriesPoint> {
    sample(max_burned, steps, |b| discount_percent(b, params))
}

/// Cumulative user mint after each recorded purchase (x is the 1-based purchase number).
pub fn mint_progression(outcome: &MintOutcome) -> Vec<SeriesPoint> {
    outcome
        .purchases
        .iter()
        .map(|p| SeriesPoint {
            x: (p.index + 1) as f64,
            y: p.user_cumulative,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mint::compute_minted_tokens;
    use mintburn_core::types::UserInputs;

    #[test]
    fn price_curve_endpoints() {
        let p = SystemParams::default();
        let pts = price_curve(&p, 2_000_000.0, 4);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], SeriesPoint { x: 0.0, y: p.p0 });
        assert_eq!(pts[4].x, 2_000_000.0);
        assert!(pts.windows(2).all(|w| w[1].y >= w[0].y));
    }

    #[test]
    fn zero_steps_gives_origin_only() {
        let p = SystemParams::default();
        let pts = discount_curve(&p, 1e6, 0);
        assert_eq!(pts, vec![SeriesPoint { x: 0.0, y: p.discount_base }]);
    }

    #[test]
    fn cashback_schedule_reaches_zero() {
        let p = SystemParams::default();
        let pts = cashback_schedule(&p, 120);
        assert_eq!(pts.len(), 121);
        assert_eq!(pts[0].y, p.cb_base);
        assert_eq!(pts[120].y, 0.0);
    }

    #[test]
    fn cashback_schedule_starts_at_or_after_launch() {
        let p = SystemParams {
            t_launch: 0.5,
            ..SystemParams::default()
        };
        let pts = cashback_schedule(&p, 3);
        assert_eq!(pts[0].x, 1.0);
        assert!(pts.iter().all(|pt| pt.x >= p.t_launch && pt.y <= p.cb_base));

        let whole = SystemParams {
            t_launch: 4.0,
            ..SystemParams::default()
        };
        let pts = cashback_schedule(&whole, 2);
        assert_eq!(pts[0], SeriesPoint { x: 4.0, y: whole.cb_base });
    }

    #[test]
    fn diminishing_curve_is_decreasing() {
        let p = SystemParams::default();
        let pts = diminishing_curve(&p, 50_000.0, 10);
        assert_eq!(pts[0].y, 1.0);
        assert!(pts.windows(2).all(|w| w[1].y < w[0].y));
    }

    #[test]
    fn progression_follows_purchases() {
        let p = SystemParams::default();
        let inputs = UserInputs {
            number_of_purchases: 6,
            ..UserInputs::default()
        };
        let outcome = compute_minted_tokens(&inputs, &p, 0.0);
        let pts = mint_progression(&outcome);
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0].x, 1.0);
        assert_eq!(pts[5].y, outcome.total_minted_user);
    }
}
