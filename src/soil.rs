//! Soil reading input type.

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// A snapshot of six lab-style soil measurements for one field.
///
/// Immutable input; identity is the values themselves. Typical ranges: pH
/// 3-9, moisture 0-100%, nutrient concentrations and organic matter >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilReading {
    /// Soil pH (unitless)
    pub ph: f64,

    /// Nitrogen concentration
    pub n: f64,

    /// Phosphorus concentration
    pub p: f64,

    /// Potassium concentration
    pub k: f64,

    /// Soil moisture (%)
    pub moisture: f64,

    /// Organic matter (%)
    pub om: f64,
}

impl SoilReading {
    /// Reject non-finite measurements before any computation starts.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        let fields = [
            ("ph", self.ph),
            ("n", self.n),
            ("p", self.p),
            ("k", self.k),
            ("moisture", self.moisture),
            ("om", self.om),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(AdvisorError::validation(format!(
                    "soil reading '{name}' must be a finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SoilReading {
        SoilReading { ph: 6.4, n: 48.0, p: 16.0, k: 64.0, moisture: 23.5, om: 2.9 }
    }

    #[test]
    fn test_finite_reading_accepted() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_nan_rejected() {
        let mut soil = sample();
        soil.moisture = f64::NAN;
        let err = soil.validate().unwrap_err();
        assert!(matches!(err, AdvisorError::Validation(_)));
        assert!(err.to_string().contains("moisture"));
    }

    #[test]
    fn test_infinity_rejected() {
        let mut soil = sample();
        soil.k = f64::INFINITY;
        assert!(soil.validate().is_err());
    }
}
