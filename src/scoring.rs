//! Soil suitability scoring.
//!
//! Maps a soil reading against a crop profile to a 0-100 composite score with
//! per-factor sub-scores and threshold-selected diagnostic notes. Every
//! constant here (weights, clamps, targets) is part of the output contract;
//! changing any of them changes results for identical inputs.

use serde::Serialize;

use crate::crop::{CropProfile, TARGET_K, TARGET_N, TARGET_P};
use crate::soil::SoilReading;

// Sub-score weights for the overall composite.
const WEIGHT_PH: f64 = 0.26;
const WEIGHT_NPK: f64 = 0.34;
const WEIGHT_MOISTURE: f64 = 0.22;
const WEIGHT_OM: f64 = 0.18;

/// Fraction of a nutrient target below which that nutrient is flagged as a
/// limiting factor.
const LIMITING_FRACTION: f64 = 0.85;

/// Suitability score with per-factor breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Composite suitability, clamped to [40, 100]
    pub overall: f64,

    /// pH sub-score [40, 100]
    pub ph: f64,

    /// Combined NPK sub-score (mean of n/p/k)
    pub npk: f64,

    /// Individual nutrient sub-scores [45, 100]
    pub n: f64,
    pub p: f64,
    pub k: f64,

    /// Moisture sub-score [40, 100]
    pub moisture: f64,

    /// Organic matter sub-score [45, 100]
    pub organic_matter: f64,

    /// Human-readable diagnostics, one per factor plus a limiting-factor note
    pub notes: Vec<String>,
}

/// Sub-score for one nutrient against its fixed target.
///
/// Readings above target decay gently (surplus is mildly penalized); readings
/// below target scale up from a 60-point floor. The demand weight shifts the
/// final value before clamping to [45, 100].
fn nutrient_score(value: f64, target: f64, weight: f64) -> f64 {
    let ratio = value / target;
    let s = if ratio >= 1.0 {
        100.0 - (ratio - 1.0) * 20.0
    } else {
        60.0 + ratio * 40.0
    };
    (s * (1.0 / weight) + (weight - 1.0) * 10.0).clamp(45.0, 100.0)
}

/// Score a soil reading against a crop profile.
pub fn score_soil(soil: &SoilReading, profile: &CropProfile) -> ScoreBreakdown {
    let mut notes = Vec::new();

    // pH: distance from the range midpoint, 22 points per pH unit
    let (ph_min, ph_max) = profile.ph_range;
    let ph_delta = (soil.ph - profile.ph_midpoint()).abs();
    let ph_score = (100.0 - ph_delta * 22.0).clamp(40.0, 100.0);
    notes.push(
        if soil.ph < ph_min {
            "Soil pH is slightly below the optimum for the selected crop."
        } else if soil.ph > ph_max {
            "Soil pH is slightly above the optimum for the selected crop."
        } else {
            "Soil pH is in a healthy range for this crop."
        }
        .to_string(),
    );

    // NPK against the fixed targets, demand-weighted per crop
    let demand = &profile.nutrient_demand;
    let n_score = nutrient_score(soil.n, TARGET_N, demand.n);
    let p_score = nutrient_score(soil.p, TARGET_P, demand.p);
    let k_score = nutrient_score(soil.k, TARGET_K, demand.k);
    let npk_score = (n_score + p_score + k_score) / 3.0;

    let mut low = Vec::new();
    if soil.n < TARGET_N * LIMITING_FRACTION {
        low.push("N");
    }
    if soil.p < TARGET_P * LIMITING_FRACTION {
        low.push("P");
    }
    if soil.k < TARGET_K * LIMITING_FRACTION {
        low.push("K");
    }
    notes.push(if low.is_empty() {
        "NPK levels are balanced for steady growth.".to_string()
    } else {
        format!("Limiting factor: {} below target level.", low.join(", "))
    });

    // Moisture: penalties outside the optimal window, a centering bonus inside
    let (m_min, m_max) = profile.moisture_opt;
    let m_score = if soil.moisture < m_min {
        (70.0 - (m_min - soil.moisture) * 2.2).clamp(40.0, 90.0)
    } else if soil.moisture > m_max {
        (78.0 - (soil.moisture - m_max) * 2.0).clamp(40.0, 90.0)
    } else {
        let centered = (soil.moisture - m_min).min(m_max - soil.moisture) / (m_max - m_min);
        92.0 + centered * 8.0
    };
    notes.push(
        if soil.moisture < m_min {
            "Moisture is below optimum; irrigation scheduling accuracy matters."
        } else if soil.moisture > m_max {
            "Moisture is high; check drainage and root-zone aeration."
        } else {
            "Moisture is in the optimal range for efficient uptake."
        }
        .to_string(),
    );

    // Organic matter relative to the crop's minimum desirable level
    let om_score = (55.0 + (soil.om / profile.om_opt_min) * 45.0).clamp(45.0, 100.0);
    notes.push(
        if soil.om < profile.om_opt_min {
            "Organic matter is low; add compost or cover crops to improve structure."
        } else {
            "Organic matter helps retain moisture and improves nutrient cycling."
        }
        .to_string(),
    );

    let overall = WEIGHT_PH * ph_score
        + WEIGHT_NPK * npk_score
        + WEIGHT_MOISTURE * m_score
        + WEIGHT_OM * om_score;

    ScoreBreakdown {
        overall: overall.clamp(40.0, 100.0),
        ph: ph_score,
        npk: npk_score,
        n: n_score,
        p: p_score,
        k: k_score,
        moisture: m_score,
        organic_matter: om_score,
        notes,
    }
}
