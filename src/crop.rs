//! Crop reference data.
//!
//! Each supported crop carries a static profile describing its pH comfort
//! range, revenue baseline, nutrient demand multipliers, optimal moisture
//! window, and minimum desirable organic matter. Profiles are read-only and
//! resolved through the `Crop` enum, so unknown keys fail at the boundary
//! instead of defaulting silently.
//!
//! The nutrient targets and every profile constant are presentation-tuned
//! demo values carried over unchanged for output parity. Do not treat them as
//! validated agronomic truth.

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Per-nutrient demand multipliers relative to a neutral crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientDemand {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

/// Fixed soil nutrient targets used by scoring and fertilizer planning
/// (concentration units). Shared across all crops.
pub const TARGET_N: f64 = 55.0;
pub const TARGET_P: f64 = 20.0;
pub const TARGET_K: f64 = 70.0;

/// Static reference data for one crop.
#[derive(Debug, Clone, PartialEq)]
pub struct CropProfile {
    /// Display label
    pub label: &'static str,

    /// Acceptable pH range [min, max]
    pub ph_range: (f64, f64),

    /// Base revenue per hectare (currency units)
    pub base_revenue_per_ha: f64,

    /// Nutrient demand multipliers
    pub nutrient_demand: NutrientDemand,

    /// Optimal soil moisture range [min, max] (%)
    pub moisture_opt: (f64, f64),

    /// Minimum desirable organic matter (%)
    pub om_opt_min: f64,
}

impl CropProfile {
    /// Midpoint of the acceptable pH range.
    pub fn ph_midpoint(&self) -> f64 {
        (self.ph_range.0 + self.ph_range.1) / 2.0
    }
}

/// Supported crops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Potato,
    Oats,
    Cabbage,
}

static POTATO: CropProfile = CropProfile {
    label: "Potato",
    ph_range: (5.5, 7.0),
    base_revenue_per_ha: 1800.0,
    nutrient_demand: NutrientDemand { n: 1.1, p: 1.05, k: 1.2 },
    moisture_opt: (20.0, 35.0),
    om_opt_min: 2.8,
};

static OATS: CropProfile = CropProfile {
    label: "Oats",
    ph_range: (5.5, 7.2),
    base_revenue_per_ha: 1200.0,
    nutrient_demand: NutrientDemand { n: 1.0, p: 0.95, k: 0.9 },
    moisture_opt: (18.0, 30.0),
    om_opt_min: 2.5,
};

static CABBAGE: CropProfile = CropProfile {
    label: "Cabbage",
    ph_range: (6.0, 7.2),
    base_revenue_per_ha: 2200.0,
    nutrient_demand: NutrientDemand { n: 1.05, p: 1.1, k: 1.1 },
    moisture_opt: (22.0, 38.0),
    om_opt_min: 3.2,
};

impl Crop {
    /// All supported crops.
    pub fn all() -> &'static [Crop] {
        &[Crop::Potato, Crop::Oats, Crop::Cabbage]
    }

    /// Resolve a crop key (as sent by a UI or advisory request).
    ///
    /// Unknown keys are a `ValidationError`: construction must fail before
    /// any scoring happens, never silently default.
    pub fn from_key(key: &str) -> Result<Self, AdvisorError> {
        match key {
            "potato" => Ok(Crop::Potato),
            "oats" => Ok(Crop::Oats),
            "cabbage" => Ok(Crop::Cabbage),
            other => Err(AdvisorError::validation(format!(
                "unknown crop key '{other}' (expected one of: potato, oats, cabbage)"
            ))),
        }
    }

    /// The wire/request key for this crop.
    pub fn key(&self) -> &'static str {
        match self {
            Crop::Potato => "potato",
            Crop::Oats => "oats",
            Crop::Cabbage => "cabbage",
        }
    }

    /// Static profile for this crop.
    pub fn profile(&self) -> &'static CropProfile {
        match self {
            Crop::Potato => &POTATO,
            Crop::Oats => &OATS,
            Crop::Cabbage => &CABBAGE,
        }
    }

    /// Friendly name for display.
    pub fn label(&self) -> &'static str {
        self.profile().label
    }

    /// Yield response multiplier used by the outcome projection.
    pub fn yield_adjustment(&self) -> f64 {
        match self {
            Crop::Cabbage => 1.05,
            Crop::Potato => 1.00,
            Crop::Oats => 0.95,
        }
    }

    /// Crop-specific fertilizer guidance sentence.
    pub fn fertilizer_guidance(&self) -> &'static str {
        match self {
            Crop::Potato => {
                "Emphasise potassium for tuber formation and storability; avoid \
                 excess nitrogen late in the season."
            }
            Crop::Oats => {
                "Feed value is highest with balanced NPK and adequate moisture \
                 through stem elongation."
            }
            Crop::Cabbage => {
                "Moisture and potassium drive head density and storage quality."
            }
        }
    }
}
