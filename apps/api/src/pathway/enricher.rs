//! Skill Enricher & Course Ranker.
//!
//! Attaches spine metadata and a target-specific course recommendation list to every
//! tiered skill. Missing metadata degrades to empty strings rather than failing the request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::embedding::{cosine_similarity, Embedder};
use crate::models::course::Course;
use crate::pathway::error::PathwayError;
use crate::pathway::tiers::{Tier, TierAssignment};
use crate::reference::{CourseCatalog, SkillSpineStore};

/// A tiered skill with everything the export needs. Tree structure lives in `SkillTree`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedSkill {
    pub name: String,
    pub description: String,
    pub alignment: String,
    pub courses: Vec<Course>,
    pub tier: Tier,
    pub is_match: bool,
}

/// Memoizes course encodings for the lifetime of one request.
pub struct CourseEncoder<'a> {
    embedder: &'a dyn Embedder,
    cache: HashMap<String, Vec<f32>>,
}

impl<'a> CourseEncoder<'a> {
    pub fn new(embedder: &'a dyn Embedder) -> Self {
        Self {
            embedder,
            cache: HashMap::new(),
        }
    }

    pub fn encode(&mut self, course: &Course) -> Result<&[f32], PathwayError> {
        let text = course.embedding_text();
        if !self.cache.contains_key(&text) {
            let vector = self.embedder.encode(&text)?;
            self.cache.insert(text.clone(), vector);
        }
        Ok(&self.cache[&text])
    }
}

/// Keeps every course at or above `threshold` similarity to the target occupation.
/// When none qualify the single best course is kept, so the list is never empty
/// while the skill has courses.
pub fn rank_courses(
    courses: &[&Course],
    target: &[f32],
    encoder: &mut CourseEncoder<'_>,
    threshold: f32,
) -> Result<Vec<Course>, PathwayError> {
    let mut kept = Vec::new();
    let mut best: Option<(&Course, f32)> = None;

    for &course in courses {
        let similarity = cosine_similarity(encoder.encode(course)?, target);
        if similarity >= threshold {
            kept.push(course.clone());
        }
        if best.map_or(true, |(_, s)| similarity > s) {
            best = Some((course, similarity));
        }
    }

    if kept.is_empty() {
        if let Some((course, similarity)) = best {
            debug!(
                "No course cleared {threshold}; falling back to '{}' ({similarity:.3})",
                course.course_title
            );
            kept.push(course.clone());
        }
    }
    Ok(kept)
}

/// Enriches every skill of every tier. Output is keyed by skill name.
pub fn enrich(
    tiers: &TierAssignment,
    spine: &SkillSpineStore,
    courses: &CourseCatalog,
    target: &[f32],
    embedder: &dyn Embedder,
    threshold: f32,
) -> Result<HashMap<String, CategorizedSkill>, PathwayError> {
    let mut encoder = CourseEncoder::new(embedder);
    let mut enriched = HashMap::with_capacity(tiers.total());

    for (tier, name) in tiers.iter() {
        let (description, alignment) = match spine.get(name) {
            Ok(record) => (record.skill_statement.clone(), record.alignment_name.clone()),
            Err(e) => {
                warn!("{e}; continuing with empty description");
                (String::new(), String::new())
            }
        };

        let recommended = rank_courses(&courses.courses_for(name), target, &mut encoder, threshold)?;

        enriched.entry(name.to_string()).or_insert(CategorizedSkill {
            name: name.to_string(),
            description,
            alignment,
            courses: recommended,
            tier,
            is_match: false,
        });
    }

    Ok(enriched)
}
