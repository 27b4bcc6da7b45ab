//! Analysis pipeline: validated request in, complete report out.
//!
//! The pipeline is purely synchronous: validate → derive the seed from a
//! canonical encoding of the inputs → score → fertilizer plan → care plan →
//! projection. Each request gets its own generator; nothing is shared, so
//! the same request always produces a bit-identical report. Either the full
//! report is produced or an error is returned; no partial results.

use serde::{Deserialize, Serialize};

use crate::care::build_care_plan;
use crate::crop::Crop;
use crate::display::{format_area, format_money};
use crate::error::AdvisorError;
use crate::fertilizer::{build_fertilizer_plan, FertilizerPlan};
use crate::field::FieldSelection;
use crate::outcome::{estimate_outcomes, Projection};
use crate::rng::SeededRng;
use crate::scoring::{score_soil, ScoreBreakdown};
use crate::soil::SoilReading;

/// One analysis request: crop choice, soil reading, drawn field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub crop: Crop,
    pub soil: SoilReading,
    pub field: FieldSelection,
}

/// The complete result set for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub crop: Crop,
    pub soil: SoilReading,
    pub score: ScoreBreakdown,
    pub fertilizer: FertilizerPlan,
    pub care_plan: Vec<String>,
    pub projection: Projection,

    /// Field area in hectares
    pub area_ha: f64,

    /// Center label as shown to the user (5 decimal places)
    pub center_label: String,

    /// Shape tag as drawn
    pub selection_label: &'static str,
}

impl AnalysisRequest {
    /// Build a request from a stringly-typed crop key (as a UI or advisory
    /// payload would supply it). Fails with a `ValidationError` on unknown
    /// keys before anything else runs.
    pub fn from_key(
        crop_key: &str,
        soil: SoilReading,
        field: FieldSelection,
    ) -> Result<Self, AdvisorError> {
        Ok(Self { crop: Crop::from_key(crop_key)?, soil, field })
    }

    /// Canonical string encoding of the inputs, used to derive the seed.
    ///
    /// Area is rounded to 3 decimals and the center collapses to its display
    /// label, so cosmetic jitter in the drawn shape does not reseed the
    /// generator while any real input change does.
    pub fn canonical_seed_input(&self) -> String {
        let area = (self.field.area_ha() * 1000.0).round() / 1000.0;
        format!(
            "{{\"crop\":\"{}\",\"soil\":{{\"ph\":{},\"n\":{},\"p\":{},\"k\":{},\"moisture\":{},\"om\":{}}},\"area\":{},\"center\":\"{}\"}}",
            self.crop.key(),
            self.soil.ph,
            self.soil.n,
            self.soil.p,
            self.soil.k,
            self.soil.moisture,
            self.soil.om,
            area,
            self.field.center_label(),
        )
    }

    /// Run the full estimator pipeline.
    pub fn analyze(&self) -> Result<AnalysisReport, AdvisorError> {
        // All validation happens before the generator is allocated
        self.soil.validate()?;
        self.field.validate()?;

        let mut rng = SeededRng::from_input(&self.canonical_seed_input());

        let profile = self.crop.profile();
        let score = score_soil(&self.soil, profile);
        let fertilizer = build_fertilizer_plan(&self.soil, self.crop, &mut rng);
        let care_plan = build_care_plan(&self.soil, profile, &mut rng);
        let projection = estimate_outcomes(&score, self.crop, self.field.area_ha(), &mut rng);

        Ok(AnalysisReport {
            crop: self.crop,
            soil: self.soil,
            score,
            fertilizer,
            care_plan,
            projection,
            area_ha: self.field.area_ha(),
            center_label: self.field.center_label(),
            selection_label: self.field.shape.display_text(),
        })
    }
}

impl AnalysisReport {
    /// Plain-text summary suitable for sharing/clipboard export.
    pub fn share_summary(&self) -> String {
        let soil = &self.soil;
        let totals = &self.fertilizer.totals;
        let lines = [
            format!("Agro Advisor · {}", self.crop.label()),
            format!(
                "Field: {} · {} · center {}",
                self.selection_label,
                format_area(self.area_ha * crate::field::M2_PER_HA),
                self.center_label
            ),
            format!(
                "Soil: pH {:.1} · N/P/K {:.0}/{:.0}/{:.0} · moisture {:.1}% · organic matter {:.1}%",
                soil.ph, soil.n, soil.p, soil.k, soil.moisture, soil.om
            ),
            format!(
                "Effect: +{:.1}% yield · ~${} profit/savings",
                self.projection.yield_increase_pct,
                format_money(self.projection.profit)
            ),
            format!(
                "Recommendation: {}N {}P {}K kg/ha (split applications)",
                totals.n, totals.p, totals.k
            ),
        ];
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{LatLng, ShapeKind};

    fn sample_request() -> AnalysisRequest {
        AnalysisRequest {
            crop: Crop::Potato,
            soil: SoilReading { ph: 6.4, n: 48.0, p: 16.0, k: 64.0, moisture: 23.5, om: 2.9 },
            field: FieldSelection {
                area_m2: 20_000.0,
                center: LatLng { lat: 62.0272, lng: 129.7321 },
                shape: ShapeKind::Polygon,
            },
        }
    }

    #[test]
    fn test_canonical_encoding_shape() {
        let encoded = sample_request().canonical_seed_input();
        assert!(encoded.starts_with("{\"crop\":\"potato\""));
        assert!(encoded.contains("\"moisture\":23.5"));
        assert!(encoded.contains("\"area\":2"));
        assert!(encoded.contains("62.02720, 129.73210"));
    }

    #[test]
    fn test_seed_ignores_sub_millihectare_noise() {
        let mut a = sample_request();
        let mut b = sample_request();
        a.field.area_m2 = 20_000.0;
        b.field.area_m2 = 20_001.0; // rounds to the same 3-decimal hectare value
        assert_eq!(a.canonical_seed_input(), b.canonical_seed_input());
    }

    #[test]
    fn test_unknown_crop_key_fails_before_analysis() {
        let req = sample_request();
        let err = AnalysisRequest::from_key("barley", req.soil, req.field).unwrap_err();
        assert!(matches!(err, AdvisorError::Validation(_)));
    }

    #[test]
    fn test_invalid_soil_produces_no_report() {
        let mut req = sample_request();
        req.soil.ph = f64::NAN;
        assert!(req.analyze().is_err());
    }

    #[test]
    fn test_share_summary_lines() {
        let report = sample_request().analyze().unwrap();
        let summary = report.share_summary();
        assert_eq!(summary.lines().count(), 5);
        assert!(summary.contains("Potato"));
        assert!(summary.contains("2.00 ha"));
    }
}
