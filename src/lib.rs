//! Deterministic Agronomy Estimator
//!
//! Turns a field selection, a soil reading, and a crop choice into a soil
//! suitability score, a phased fertilizer plan, a care-task checklist, and a
//! yield/profit projection. All variation is driven by a generator seeded from
//! the inputs, so the same request always reproduces the same report.
//!
//! Module layout:
//! - `rng`: input-keyed seed derivation + deterministic generator
//! - `crop` / `soil` / `field`: validated input types and crop reference data
//! - `scoring` / `fertilizer` / `care` / `outcome`: the four estimator stages
//! - `analysis`: request → report pipeline
//! - `display`: formatting helpers for a consuming UI
//! - `remote`: optional external advisory service contract (feature `remote`
//!   adds the HTTP client; payload parsing/validation is always available)

pub mod analysis;
pub mod care;
pub mod crop;
pub mod display;
pub mod error;
pub mod fertilizer;
pub mod field;
pub mod outcome;
pub mod remote;
pub mod rng;
pub mod scoring;
pub mod soil;

// Re-export commonly used types
pub use analysis::{AnalysisReport, AnalysisRequest};
pub use care::build_care_plan;
pub use crop::{Crop, CropProfile, NutrientDemand};
pub use error::AdvisorError;
pub use fertilizer::{build_fertilizer_plan, FertilizerPlan};
pub use field::{FieldSelection, LatLng, ShapeKind};
pub use outcome::{estimate_outcomes, Projection};
pub use remote::{parse_advisory_payload, AdvisoryRequest, AdvisoryResponse};
pub use rng::SeededRng;
pub use scoring::{score_soil, ScoreBreakdown};
pub use soil::SoilReading;
