//! Candidate Skill Selector: the skills most similar to the target occupation that some
//! course actually teaches, plus the unfiltered top skills of the current occupation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::embedding::NearestNeighbors;
use crate::pathway::context::PathwayParams;
use crate::pathway::error::PathwayError;
use crate::reference::{CourseCatalog, SkillCatalog};

/// A candidate skill and its cosine similarity to the target occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSkill {
    pub name: String,
    pub similarity: f32,
}

#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    /// Course-backed skills in descending similarity to the target ("importance order").
    pub ranked: Vec<RankedSkill>,
    /// Top skills of the current occupation, used only for overlap marking.
    pub current_skills: HashSet<String>,
}

impl CandidateSet {
    pub fn names(&self) -> Vec<String> {
        self.ranked.iter().map(|s| s.name.clone()).collect()
    }
}

/// Runs both nearest-neighbor lookups and applies the course filter and cap.
pub fn select_candidates(
    index: &dyn NearestNeighbors,
    skills: &SkillCatalog,
    courses: &CourseCatalog,
    target: &[f32],
    current: &[f32],
    params: &PathwayParams,
) -> Result<CandidateSet, PathwayError> {
    let mut ranked = Vec::with_capacity(params.max_skills);
    for hit in index.search(target, params.target_search_k)? {
        if ranked.len() >= params.max_skills {
            break;
        }
        let name = skill_at(skills, hit.index)?;
        if !courses.has_courses(name) {
            continue;
        }
        debug!("Candidate '{}' similarity {:.4}", name, hit.score);
        ranked.push(RankedSkill {
            name: name.to_string(),
            similarity: hit.score,
        });
    }

    let current_skills = index
        .search(current, params.current_search_k)?
        .into_iter()
        .map(|hit| skill_at(skills, hit.index).map(str::to_string))
        .collect::<Result<HashSet<_>, _>>()?;

    Ok(CandidateSet {
        ranked,
        current_skills,
    })
}

fn skill_at(skills: &SkillCatalog, index: usize) -> Result<&str, PathwayError> {
    skills
        .name(index)
        .ok_or_else(|| PathwayError::UnknownSkill(format!("catalog row {index}")))
}
