//! Read-only reference datasets, loaded once at startup and shared by every request.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

pub mod courses;
pub mod occupations;
pub mod skills;
pub mod spine;

pub use courses::{CourseCatalog, SkillCourseMap};
pub use occupations::OccupationCatalog;
pub use skills::SkillCatalog;
pub use spine::SkillSpineStore;

const OCCUPATIONS_FILE: &str = "detailed_occupations.json";
const SKILL_ORDER_FILE: &str = "skillOrder.json";
const SKILL_EMBEDDINGS_FILE: &str = "skill_embeddings.json";
const COURSES_FILE: &str = "courses.json";
const SKILL_COURSES_FILE: &str = "courses_with_skills.json";
const SPINE_DIR: &str = "skillsRSD";

/// Every dataset the pathway pipeline reads.
pub struct ReferenceData {
    pub occupations: OccupationCatalog,
    pub skills: SkillCatalog,
    pub courses: CourseCatalog,
    pub skill_courses: SkillCourseMap,
    pub spine: SkillSpineStore,
}

impl ReferenceData {
    /// Loads all datasets from `data_dir`. Blocking; call from a worker thread.
    pub fn load(data_dir: &Path) -> Result<Self> {
        info!("Loading reference data from {}", data_dir.display());

        let occupations = OccupationCatalog::new(read_json(&data_dir.join(OCCUPATIONS_FILE))?);
        let skills = SkillCatalog::new(
            read_json(&data_dir.join(SKILL_ORDER_FILE))?,
            read_json(&data_dir.join(SKILL_EMBEDDINGS_FILE))?,
        )?;
        let courses = CourseCatalog::new(read_json(&data_dir.join(COURSES_FILE))?);
        let skill_courses: SkillCourseMap = read_json(&data_dir.join(SKILL_COURSES_FILE))?;
        let spine = SkillSpineStore::load_dir(&data_dir.join(SPINE_DIR))?;

        info!(
            "Reference data loaded: {} occupations, {} skills ({} dims), {} courses, {} spine records",
            occupations.len(),
            skills.len(),
            skills.dimension(),
            courses.len(),
            spine.len()
        );

        Ok(Self {
            occupations,
            skills,
            courses,
            skill_courses,
            spine,
        })
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
