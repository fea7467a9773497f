//! Tree Serializer/Traverser: flattens the skill tree into the node/edge export.
//!
//! Depth-first from the root. The traversal state (visited set plus output so far) is
//! moved through each recursive call and handed back, so re-entering a visited name is
//! a no-op by construction.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::course::Course;
use crate::pathway::enricher::CategorizedSkill;
use crate::pathway::linker::{SkillTree, ROOT};

/// One node of the exported pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: String,
    pub skill_name: String,
    pub description: String,
    pub alignment: String,
    pub courses: Vec<Course>,
    #[serde(rename = "match")]
    pub is_match: bool,
    pub label: String,
}

impl ExportNode {
    fn root() -> Self {
        Self::bare(ROOT)
    }

    fn bare(name: &str) -> Self {
        Self {
            id: name.to_string(),
            skill_name: name.to_string(),
            description: String::new(),
            alignment: String::new(),
            courses: Vec::new(),
            is_match: false,
            label: String::new(),
        }
    }

    fn from_skill(skill: &CategorizedSkill) -> Self {
        Self {
            id: skill.name.clone(),
            skill_name: skill.name.clone(),
            description: skill.description.clone(),
            alignment: skill.alignment.clone(),
            courses: skill.courses.clone(),
            is_match: skill.is_match,
            label: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEdge {
    pub from: String,
    pub to: String,
}

/// The pathway as returned to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathwayExport {
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<ExportEdge>,
}

impl PathwayExport {
    /// Flags every node whose skill is among the current occupation's top skills.
    pub fn mark_matches(&mut self, current_skills: &HashSet<String>) {
        for node in &mut self.nodes {
            if current_skills.contains(&node.skill_name) {
                node.is_match = true;
            }
        }
    }

    pub fn match_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_match).count()
    }
}

#[derive(Default)]
struct Traversal {
    visited: HashSet<String>,
    export: PathwayExport,
}

/// Serializes `tree` starting at `ROOT`, joining node records from `skills`.
/// A child without a record is emitted with empty metadata.
pub fn serialize(tree: &SkillTree, skills: &HashMap<String, CategorizedSkill>) -> PathwayExport {
    visit(tree, skills, ROOT, Traversal::default()).export
}

fn visit(
    tree: &SkillTree,
    skills: &HashMap<String, CategorizedSkill>,
    name: &str,
    mut state: Traversal,
) -> Traversal {
    if !state.visited.insert(name.to_string()) {
        return state;
    }

    let node = match skills.get(name) {
        Some(skill) => ExportNode::from_skill(skill),
        None if name == ROOT => ExportNode::root(),
        None => ExportNode::bare(name),
    };
    state.export.nodes.push(node);

    for child in tree.children(name) {
        state.export.edges.push(ExportEdge {
            from: name.to_string(),
            to: child.clone(),
        });
        state = visit(tree, skills, child, state);
    }
    state
}
