//! Fertilizer plan construction.
//!
//! Derives per-nutrient application rates from the gap between the soil
//! reading and the fixed nutrient targets, scaled by crop demand, with a
//! small seeded jitter so identical inputs reproduce identical plans. The
//! total per nutrient is split across three application phases; each phase
//! amount is rounded independently (rounding error is accepted, not
//! redistributed).

use serde::Serialize;

use crate::crop::{Crop, TARGET_K, TARGET_N, TARGET_P};
use crate::rng::SeededRng;
use crate::soil::SoilReading;

// Base application rates (kg/ha) before demand scaling and gap adjustment.
const BASE_N: f64 = 80.0;
const BASE_P: f64 = 45.0;
const BASE_K: f64 = 55.0;

// Per-nutrient clamp bounds on the final rate (kg/ha).
const BOUNDS_N: (f64, f64) = (45.0, 165.0);
const BOUNDS_P: (f64, f64) = (22.0, 95.0);
const BOUNDS_K: (f64, f64) = (28.0, 120.0);

// Fractional split of each nutrient total across the three phases.
const SPLIT_EARLY: (f64, f64, f64) = (0.45, 0.75, 0.55);
const SPLIT_MID: (f64, f64, f64) = (0.35, 0.15, 0.30);
const SPLIT_LATE: (f64, f64, f64) = (0.20, 0.10, 0.15);

/// Rounded NPK amounts for one application phase (kg/ha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseAmounts {
    pub n: u32,
    pub p: u32,
    pub k: u32,
}

/// A phased nutrient-application schedule for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizerPlan {
    /// Rounded totals per nutrient (kg/ha)
    pub totals: PhaseAmounts,

    /// Early / basal application
    pub early: PhaseAmounts,

    /// Mid-season application
    pub mid: PhaseAmounts,

    /// Late-season application
    pub late: PhaseAmounts,

    /// One-line entries for compact display, one per nutrient
    pub total_chips: Vec<String>,

    /// Free-text recommendation combining totals, split, and crop guidance
    pub summary: String,

    /// Crop-specific guidance sentence
    pub guidance: &'static str,
}

/// Gap ratio for one nutrient: how far the reading sits below its target,
/// bounded so a surplus can only discount the base rate by 25%.
fn gap_ratio(reading: f64, target: f64, demand: f64) -> f64 {
    ((target - reading) / target).clamp(-0.25, 1.0) * demand
}

fn split_phase(totals: (f64, f64, f64), fractions: (f64, f64, f64)) -> PhaseAmounts {
    PhaseAmounts {
        n: (totals.0 * fractions.0).round() as u32,
        p: (totals.1 * fractions.1).round() as u32,
        k: (totals.2 * fractions.2).round() as u32,
    }
}

/// Build the fertilizer plan for a soil reading and crop.
///
/// Consumes exactly three generator draws (one per nutrient, in N/P/K
/// order); callers sequencing multiple stages off one generator rely on
/// that.
pub fn build_fertilizer_plan(soil: &SoilReading, crop: Crop, rng: &mut SeededRng) -> FertilizerPlan {
    let demand = &crop.profile().nutrient_demand;

    let gap_n = gap_ratio(soil.n, TARGET_N, demand.n);
    let gap_p = gap_ratio(soil.p, TARGET_P, demand.p);
    let gap_k = gap_ratio(soil.k, TARGET_K, demand.k);

    // Final rate: base × demand × (1 + gap), jittered by ±8%, then clamped
    let rate = |base: f64, demand: f64, gap: f64, bounds: (f64, f64), r: f64| {
        (base * demand * (1.0 + gap) * (0.92 + r * 0.16)).clamp(bounds.0, bounds.1)
    };
    let kg_n = rate(BASE_N, demand.n, gap_n, BOUNDS_N, rng.next_f64());
    let kg_p = rate(BASE_P, demand.p, gap_p, BOUNDS_P, rng.next_f64());
    let kg_k = rate(BASE_K, demand.k, gap_k, BOUNDS_K, rng.next_f64());

    let totals_f = (kg_n, kg_p, kg_k);
    let totals = PhaseAmounts {
        n: kg_n.round() as u32,
        p: kg_p.round() as u32,
        k: kg_k.round() as u32,
    };
    let early = split_phase(totals_f, SPLIT_EARLY);
    let mid = split_phase(totals_f, SPLIT_MID);
    let late = split_phase(totals_f, SPLIT_LATE);

    let total_chips = vec![
        format!("N: {} kg/ha", totals.n),
        format!("P: {} kg/ha", totals.p),
        format!("K: {} kg/ha", totals.k),
    ];

    let guidance = crop.fertilizer_guidance();
    let summary = format!(
        "Recommended application (per hectare): {} kg N, {} kg P, {} kg K. \
         Apply in splits: early {}/{}/{}, mid-season {}/{}/{}, late {}/{}/{} (N/P/K). {}",
        totals.n, totals.p, totals.k,
        early.n, early.p, early.k,
        mid.n, mid.p, mid.k,
        late.n, late.p, late.k,
        guidance,
    );

    FertilizerPlan { totals, early, mid, late, total_chips, summary, guidance }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::Crop;

    fn sample_soil() -> SoilReading {
        SoilReading { ph: 6.4, n: 48.0, p: 16.0, k: 64.0, moisture: 23.5, om: 2.9 }
    }

    #[test]
    fn test_rates_within_bounds_for_extreme_soils() {
        let depleted = SoilReading { ph: 5.0, n: 0.0, p: 0.0, k: 0.0, moisture: 10.0, om: 0.5 };
        let saturated =
            SoilReading { ph: 7.5, n: 500.0, p: 200.0, k: 600.0, moisture: 60.0, om: 8.0 };
        for soil in [depleted, saturated] {
            for (seed, crop) in [(1u32, Crop::Potato), (2, Crop::Oats), (3, Crop::Cabbage)] {
                let mut rng = SeededRng::new(seed);
                let plan = build_fertilizer_plan(&soil, crop, &mut rng);
                assert!((45..=165).contains(&plan.totals.n));
                assert!((22..=95).contains(&plan.totals.p));
                assert!((28..=120).contains(&plan.totals.k));
            }
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        let soil = sample_soil();
        let a = build_fertilizer_plan(&soil, Crop::Potato, &mut SeededRng::new(42));
        let b = build_fertilizer_plan(&soil, Crop::Potato, &mut SeededRng::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_consumes_three_draws() {
        let mut plan_rng = SeededRng::new(7);
        build_fertilizer_plan(&sample_soil(), Crop::Oats, &mut plan_rng);

        let mut reference = SeededRng::new(7);
        for _ in 0..3 {
            reference.next_f64();
        }
        assert_eq!(plan_rng.next_f64().to_bits(), reference.next_f64().to_bits());
    }

    #[test]
    fn test_phases_sum_close_to_total() {
        // Each phase rounds independently; splits sum to 1.0 per nutrient, so
        // the phase sum may drift from the rounded total by a couple of kg.
        let mut rng = SeededRng::new(99);
        let plan = build_fertilizer_plan(&sample_soil(), Crop::Cabbage, &mut rng);
        let n_sum = plan.early.n + plan.mid.n + plan.late.n;
        assert!((i64::from(n_sum) - i64::from(plan.totals.n)).abs() <= 2);
    }

    #[test]
    fn test_summary_mentions_guidance() {
        let mut rng = SeededRng::new(5);
        let plan = build_fertilizer_plan(&sample_soil(), Crop::Potato, &mut rng);
        assert!(plan.summary.contains(plan.guidance));
        assert!(plan.summary.contains("Recommended application"));
        assert_eq!(plan.total_chips.len(), 3);
    }
}
