//! Yield and profit projection.
//!
//! Projects a yield-increase percentage and a profit/savings estimate from
//! the suitability score, the crop's revenue baseline, and the field area.
//! The model rewards improvement room: the further the composite score sits
//! below 100, the more headroom the projection assumes.

use serde::Serialize;

use crate::crop::Crop;
use crate::rng::SeededRng;
use crate::scoring::ScoreBreakdown;

/// Bounds on the projected yield increase (%).
pub const YIELD_PCT_BOUNDS: (f64, f64) = (5.5, 19.5);

/// Bounds on the projected profit/savings (currency units).
pub const PROFIT_BOUNDS: (f64, f64) = (180.0, 250_000.0);

/// Projected effect of following the recommendations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    /// Yield increase (%), clamped to [5.5, 19.5]
    pub yield_increase_pct: f64,

    /// Profit/savings estimate (currency units), clamped to [180, 250000]
    pub profit: f64,

    /// Rationale sentence selected by yield magnitude
    pub yield_rationale: &'static str,

    /// Rationale sentence selected by profit magnitude
    pub profit_rationale: &'static str,
}

/// Project outcomes from the score, crop, and area in hectares.
///
/// Consumes exactly three generator draws: yield jitter, input savings, risk
/// reduction.
pub fn estimate_outcomes(
    score: &ScoreBreakdown,
    crop: Crop,
    area_ha: f64,
    rng: &mut SeededRng,
) -> Projection {
    // How much headroom the field has: a perfect score leaves 5% minimum
    let improvement_room = ((100.0 - score.overall) / 60.0).clamp(0.05, 1.0);
    let base = 6.5 + improvement_room * 11.5; // 6.5%..18%
    let jitter = (rng.next_f64() - 0.5) * 2.2; // +/- 1.1
    let yield_increase_pct =
        (base * crop.yield_adjustment() + jitter).clamp(YIELD_PCT_BOUNDS.0, YIELD_PCT_BOUNDS.1);

    // Profit: revenue lift discounted to 78%, plus per-hectare savings bands
    let revenue_lift = area_ha * crop.profile().base_revenue_per_ha * (yield_increase_pct / 100.0);
    let input_savings = area_ha * (38.0 + rng.next_f64() * 42.0);
    let risk_reduction = area_ha * (20.0 + rng.next_f64() * 35.0);
    let profit = (revenue_lift * 0.78 + input_savings + risk_reduction)
        .clamp(PROFIT_BOUNDS.0, PROFIT_BOUNDS.1);

    let yield_rationale = if yield_increase_pct > 14.0 {
        "Strong effect from removing the main limiting factor."
    } else if yield_increase_pct > 10.0 {
        "Moderate effect from targeted NPK tuning and moisture management."
    } else {
        "Steady gain from small corrections and better uptake."
    };

    let profit_rationale = if profit > 60_000.0 {
        "The effect scales with the large area and high response potential."
    } else {
        "Balanced savings from optimized applications and reduced losses."
    };

    Projection { yield_increase_pct, profit, yield_rationale, profit_rationale }
}
