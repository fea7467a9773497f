//! Tree Linker: gives every tiered skill exactly one parent.
//!
//! Foundational skills hang off the synthetic root. Each deeper skill attaches to the most
//! similar skill (catalog embedding cosine) of the tier directly above it. The result is an
//! immutable adjacency map; node records are kept separately and joined at export time.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::embedding::cosine_similarity;
use crate::pathway::error::PathwayError;
use crate::pathway::tiers::{Tier, TierAssignment};
use crate::reference::SkillCatalog;

/// Name of the synthetic root node.
pub const ROOT: &str = "root";

/// Parent name → child names in attachment order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillTree {
    children: HashMap<String, Vec<String>>,
}

impl SkillTree {
    pub fn children(&self, parent: &str) -> &[String] {
        self.children.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of parent → child links.
    pub fn edge_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }

    fn attach(&mut self, parent: &str, child: &str) {
        self.children
            .entry(parent.to_string())
            .or_default()
            .push(child.to_string());
    }

    #[cfg(test)]
    pub fn from_edges(edges: &[(&str, &str)]) -> Self {
        let mut tree = Self::default();
        for (parent, child) in edges {
            tree.attach(parent, child);
        }
        tree
    }
}

/// Wires the tiers into a tree rooted at `ROOT`.
///
/// Fails with `EmptyTier` when a tier is empty but the next one is not, since those
/// skills would have no parent candidate.
pub fn link(tiers: &TierAssignment, skills: &SkillCatalog) -> Result<SkillTree, PathwayError> {
    let mut tree = SkillTree::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for name in &tiers.foundational {
        if seen.insert(name.as_str()) {
            tree.attach(ROOT, name);
        }
    }

    for tier in [Tier::Medium, Tier::Niche, Tier::AppliedHard] {
        let members = tiers.get(tier);
        if members.is_empty() {
            continue;
        }
        let parent_tier = tier.parent().unwrap_or(Tier::Foundational);
        let parents = tiers.get(parent_tier);
        if parents.is_empty() {
            return Err(PathwayError::EmptyTier {
                tier: parent_tier,
                dependent: tier,
            });
        }

        for name in members {
            if !seen.insert(name.as_str()) {
                continue;
            }
            let parent = closest(name, parents, skills)?;
            debug!("Linked {tier} skill '{name}' under '{parent}'");
            tree.attach(parent, name);
        }
    }

    Ok(tree)
}

/// The candidate most cosine-similar to `skill`. The earliest candidate wins ties.
fn closest<'a>(
    skill: &str,
    candidates: &'a [String],
    skills: &SkillCatalog,
) -> Result<&'a str, PathwayError> {
    let embedding = skills.embedding(skill)?;
    let mut best: Option<(&str, f32)> = None;
    for candidate in candidates {
        let similarity = cosine_similarity(embedding, skills.embedding(candidate)?);
        if best.map_or(true, |(_, s)| similarity > s) {
            best = Some((candidate.as_str(), similarity));
        }
    }
    best.map(|(name, _)| name)
        .ok_or_else(|| PathwayError::UnknownSkill(format!("no parent candidate for '{skill}'")))
}
