//! Field selection input type.
//!
//! Produced by an external map-drawing collaborator. The estimator only needs
//! the surface area and a center label; the shape tag is carried for display.

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Square meters per hectare.
pub const M2_PER_HA: f64 = 10_000.0;

/// Selections at or below this area are treated as "no selection".
pub const MIN_SELECTION_M2: f64 = 5.0;

/// Geographic center of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// How the selection was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Polygon,
    Rectangle,
}

impl ShapeKind {
    pub fn display_text(&self) -> &'static str {
        match self {
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Rectangle => "Rectangle",
        }
    }
}

/// A drawn field boundary reduced to what the estimator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSelection {
    /// Selected surface area (m²)
    pub area_m2: f64,

    /// Geometric center of the selection
    pub center: LatLng,

    /// Shape tag from the drawing tool
    pub shape: ShapeKind,
}

impl FieldSelection {
    /// Reject non-finite coordinates and unusably small areas.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        if !self.area_m2.is_finite() || !self.center.lat.is_finite() || !self.center.lng.is_finite()
        {
            return Err(AdvisorError::validation(
                "field selection must have finite area and center coordinates",
            ));
        }
        if self.area_m2 <= MIN_SELECTION_M2 {
            return Err(AdvisorError::validation(format!(
                "selected area {:.1} m² is too small to analyze (minimum {} m²)",
                self.area_m2, MIN_SELECTION_M2
            )));
        }
        Ok(())
    }

    /// Area in hectares.
    pub fn area_ha(&self) -> f64 {
        self.area_m2 / M2_PER_HA
    }

    /// Center formatted to 5 decimal places, e.g. "62.02720, 129.73210".
    pub fn center_label(&self) -> String {
        format!("{:.5}, {:.5}", self.center.lat, self.center.lng)
    }
}
