use std::fmt::Write as _;

use anyhow::bail;
use clap::ValueEnum;

use mintburn_core::{Results, SystemParams, UserInputs};
use mintburn_engine::series::{
    cashback_schedule, diminishing_curve, discount_curve, price_curve,
};
use mintburn_engine::SeriesPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CurveKind {
    /// Token price against global supply.
    Price,
    /// Cashback per period since launch.
    Cashback,
    /// Diminishing factor against user mint.
    Diminishing,
    /// Discount against market-wide burn.
    Discount,
}

impl CurveKind {
    fn default_to(self, params: &SystemParams) -> f64 {
        match self {
            Self::Price => 2_000_000.0,
            Self::Cashback => 100.0,
            Self::Diminishing => params.user_cap * 5.0,
            Self::Discount => params.burn_cap,
        }
    }

    fn labels(self) -> (&'static str, &'static str) {
        match self {
            Self::Price => ("supply", "price"),
            Self::Cashback => ("period", "cashback"),
            Self::Diminishing => ("user mint", "factor"),
            Self::Discount => ("market burn", "discount"),
        }
    }
}

/// Longest cashback schedule the CLI will print, in periods.
pub const MAX_CURVE_PERIODS: f64 = 10_000.0;

pub fn curve_points(
    kind: CurveKind,
    params: &SystemParams,
    to: Option<f64>,
    steps: usize,
) -> anyhow::Result<Vec<SeriesPoint>> {
    let to = to.unwrap_or_else(|| kind.default_to(params));
    if !to.is_finite() {
        bail!("--to must be finite, got {to}");
    }
    let points = match kind {
        CurveKind::Price => price_curve(params, to, steps),
        CurveKind::Cashback => {
            if !(0.0..=MAX_CURVE_PERIODS).contains(&to) {
                bail!(
                    "--to for the cashback curve must be between 0 and {MAX_CURVE_PERIODS} periods, got {to}"
                );
            }
            cashback_schedule(params, to as u32)
        }
        CurveKind::Diminishing => diminishing_curve(params, to, steps),
        CurveKind::Discount => discount_curve(params, to, steps),
    };
    Ok(points)
}

pub fn table(kind: CurveKind, points: &[SeriesPoint]) -> String {
    let (x_label, y_label) = kind.labels();
    let mut out = format!("{x_label:>16}  {y_label:>16}\n");
    for p in points {
        let _ = writeln!(out, "{:>16.4}  {:>16.6}", p.x, p.y);
    }
    out
}

pub fn summary(inputs: &UserInputs, r: &Results) -> String {
    let m = &r.breakdown.mint;
    let b = &r.breakdown.burn;
    let i = &r.breakdown.interpretation;
    let a = &r.breakdown.assumptions;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Session:  {} purchase(s) at {:.2}, period {}",
        inputs.number_of_purchases,
        inputs.purchase_price,
        inputs.period_index()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Minted:       {:>14.4} tokens", r.total_minted_user);
    let _ = writeln!(out, "Burned:       {:>14.4} tokens", r.total_burned);
    let _ = writeln!(out, "  destroyed:  {:>14.4}", r.burn_destroyed);
    let _ = writeln!(out, "  to sellers: {:>14.4}", r.burn_redistributed);
    let _ = writeln!(out, "Net:          {:>14.4} tokens", r.net_tokens);
    let _ = writeln!(out, "Token price:  {:>14.4}", r.token_price);
    let _ = writeln!(out);
    let _ = writeln!(out, "Mint");
    let _ = writeln!(out, "  cashback:          {:.4}%", m.cashback_percent * 100.0);
    let _ = writeln!(out, "  quality factor:    {:.4}", m.quality_factor);
    let _ = writeln!(
        out,
        "  diminishing:       {:.6} -> {:.6}",
        m.df_at_first_purchase, m.df_at_last_purchase
    );
    let _ = writeln!(out, "  per purchase:      {:.4}", m.minted_per_purchase_average);
    let _ = writeln!(out, "  cap usage:         {:.4}%", m.cap_usage * 100.0);
    let _ = writeln!(out, "Burn");
    let _ = writeln!(out, "  discount:          {:.4}%", b.discount_percent * 100.0);
    let _ = writeln!(out, "  discount value:    {:.2}", b.discount_in_currency);
    let _ = writeln!(out, "  burn for discount: {:.4}", b.burn_for_discount);
    let _ = writeln!(out, "  access fee:        {:.4}", b.access_fee_tokens);
    let _ = writeln!(out, "Value");
    let _ = writeln!(out, "  gross spend:       {:.2}", i.gross_spend);
    let _ = writeln!(out, "  effective spend:   {:.2}", i.effective_spend);
    let _ = writeln!(out, "  net value:         {:.2}", i.net_value);
    let _ = writeln!(
        out,
        "  effective cashback: {:.4}%",
        i.effective_cashback_percent * 100.0
    );
    let _ = writeln!(out, "Assumed market");
    let _ = writeln!(
        out,
        "  {} users, burn rate {:.2}, supply {:.0} -> {:.0}, burned this year {:.0}",
        a.assumed_users,
        a.assumed_burn_rate,
        a.initial_global_minted,
        a.new_global_total_minted,
        a.market_burned_this_year
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintburn_engine::compute;

    #[test]
    fn summary_mentions_headlines() {
        let inputs = UserInputs::default();
        let r = compute(&inputs, &SystemParams::default());
        let text = summary(&inputs, &r);
        assert!(text.contains("Minted:"));
        assert!(text.contains("to sellers:"));
        assert!(text.contains("Assumed market"));
    }

    #[test]
    fn cashback_curve_uses_periods() {
        let params = SystemParams::default();
        let pts = curve_points(CurveKind::Cashback, &params, Some(10.0), 999).unwrap();
        assert_eq!(pts.len(), 11);
    }

    #[test]
    fn cashback_curve_rejects_huge_range() {
        let params = SystemParams::default();
        assert!(curve_points(CurveKind::Cashback, &params, Some(1e12), 20).is_err());
        assert!(curve_points(CurveKind::Cashback, &params, Some(-1.0), 20).is_err());
        assert!(curve_points(CurveKind::Price, &params, Some(f64::INFINITY), 20).is_err());
        let pts = curve_points(CurveKind::Cashback, &params, Some(MAX_CURVE_PERIODS), 20).unwrap();
        assert_eq!(pts.len(), MAX_CURVE_PERIODS as usize + 1);
    }

    #[test]
    fn table_has_header_and_rows() {
        let params = SystemParams::default();
        let pts = curve_points(CurveKind::Price, &params, None, 3).unwrap();
        let text = table(CurveKind::Price, &pts);
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().next().unwrap().contains("price"));
    }
}
