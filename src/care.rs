//! Care task selection.
//!
//! Builds a candidate pool of advisory tasks from threshold checks on the
//! soil reading, always adds two generic monitoring/residue tasks, then
//! dedups and applies a seeded shuffle before truncating to six items. The
//! ordering is randomized presentation, not a quality ranking.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::crop::CropProfile;
use crate::rng::SeededRng;
use crate::soil::SoilReading;

/// Maximum number of tasks in the final checklist.
pub const MAX_TASKS: usize = 6;

// Absolute nutrient thresholds that trigger management advice.
const LOW_N: f64 = 50.0;
const LOW_P: f64 = 18.0;
const LOW_K: f64 = 65.0;

const TASK_LIME: &str = "Apply lime by zone to gradually raise pH and improve nutrient availability.";
const TASK_SULFUR: &str =
    "Use elemental sulfur in small staged doses to gently correct the high pH.";
const TASK_COMPOST: &str =
    "Add compost or sow cover crops to raise organic matter and improve soil structure.";
const TASK_IRRIGATION: &str =
    "Schedule irrigation from morning moisture readings; avoid losses in the hottest hours.";
const TASK_DRAINAGE: &str =
    "Improve drainage in low spots and avoid compaction to keep roots aerated.";
const TASK_SPLIT_N: &str =
    "Split nitrogen applications to reduce leaching and improve uptake efficiency.";
const TASK_BAND_P: &str = "Band phosphorus close to the roots for a stronger start.";
const TASK_BOOST_K: &str =
    "Increase potassium during the rapid growth phase for stress tolerance.";
const TASK_SCOUT: &str = "Scout weekly for deficiency symptoms and adjust mid-season \
                          applications by 10-15% where needed.";
const TASK_RESIDUE: &str = "Leave crop residue on the surface where possible; it reduces \
                            evaporation and steadies soil temperature.";

/// Build the care checklist for a soil reading and crop profile.
///
/// Consumes one generator draw per deduplicated candidate (used as its sort
/// key). At most [`MAX_TASKS`] tasks are returned, always distinct.
pub fn build_care_plan(
    soil: &SoilReading,
    profile: &CropProfile,
    rng: &mut SeededRng,
) -> Vec<String> {
    let mut candidates: SmallVec<[&'static str; 10]> = SmallVec::new();

    let (ph_min, ph_max) = profile.ph_range;
    if soil.ph < ph_min {
        candidates.push(TASK_LIME);
    }
    if soil.ph > ph_max {
        candidates.push(TASK_SULFUR);
    }
    if soil.om < profile.om_opt_min {
        candidates.push(TASK_COMPOST);
    }

    let (m_min, m_max) = profile.moisture_opt;
    if soil.moisture < m_min {
        candidates.push(TASK_IRRIGATION);
    }
    if soil.moisture > m_max {
        candidates.push(TASK_DRAINAGE);
    }

    if soil.n < LOW_N {
        candidates.push(TASK_SPLIT_N);
    }
    if soil.p < LOW_P {
        candidates.push(TASK_BAND_P);
    }
    if soil.k < LOW_K {
        candidates.push(TASK_BOOST_K);
    }

    // Always present regardless of thresholds
    candidates.push(TASK_SCOUT);
    candidates.push(TASK_RESIDUE);

    // Dedup by exact string equality, preserving first occurrence
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    candidates.retain(|task| seen.insert(*task));

    // Randomized stable ordering: one draw per candidate as its sort key
    let mut keyed: SmallVec<[(f64, &'static str); 10]> =
        candidates.into_iter().map(|task| (rng.next_f64(), task)).collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("generator draws are finite"));

    keyed.into_iter().take(MAX_TASKS).map(|(_, task)| task.to_string()).collect()
}
