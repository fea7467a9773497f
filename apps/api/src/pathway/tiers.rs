//! Tier Categorizer: buckets the learning order into four curriculum depths.
//!
//! Cut points are fixed fractions of N (10% / 30% / 75%), giving a few roots and many
//! leaves. Floors are taken in integer arithmetic so N=20 yields exactly 2 / 6 / 15.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pathway::scorer::ScoredSkill;

const FOUNDATIONAL_PCT: usize = 10;
const MEDIUM_PCT: usize = 30;
const NICHE_PCT: usize = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Foundational,
    Medium,
    Niche,
    AppliedHard,
}

impl Tier {
    /// All tiers, shallowest first.
    pub const ORDER: [Tier; 4] = [Tier::Foundational, Tier::Medium, Tier::Niche, Tier::AppliedHard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Foundational => "foundational",
            Tier::Medium => "medium",
            Tier::Niche => "niche",
            Tier::AppliedHard => "applied_hard",
        }
    }

    /// The tier whose skills act as parents for this one. `None` for foundational.
    pub fn parent(&self) -> Option<Tier> {
        match self {
            Tier::Foundational => None,
            Tier::Medium => Some(Tier::Foundational),
            Tier::Niche => Some(Tier::Medium),
            Tier::AppliedHard => Some(Tier::Niche),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill names per tier, each list in learning order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierAssignment {
    pub foundational: Vec<String>,
    pub medium: Vec<String>,
    pub niche: Vec<String>,
    pub applied_hard: Vec<String>,
}

impl TierAssignment {
    pub fn get(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Foundational => &self.foundational,
            Tier::Medium => &self.medium,
            Tier::Niche => &self.niche,
            Tier::AppliedHard => &self.applied_hard,
        }
    }

    fn get_mut(&mut self, tier: Tier) -> &mut Vec<String> {
        match tier {
            Tier::Foundational => &mut self.foundational,
            Tier::Medium => &mut self.medium,
            Tier::Niche => &mut self.niche,
            Tier::AppliedHard => &mut self.applied_hard,
        }
    }

    /// (tier, skill) pairs, shallowest tier first.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &str)> {
        Tier::ORDER
            .into_iter()
            .flat_map(move |tier| self.get(tier).iter().map(move |s| (tier, s.as_str())))
    }

    pub fn total(&self) -> usize {
        Tier::ORDER.iter().map(|&t| self.get(t).len()).sum()
    }
}

/// Exclusive end ranks of the foundational, medium and niche tiers for `n` skills.
pub fn cut_points(n: usize) -> (usize, usize, usize) {
    (
        n * FOUNDATIONAL_PCT / 100,
        n * MEDIUM_PCT / 100,
        n * NICHE_PCT / 100,
    )
}

/// Splits a learning-ordered skill list into tiers by rank position.
pub fn categorize(sorted: &[ScoredSkill]) -> TierAssignment {
    let (cut1, cut2, cut3) = cut_points(sorted.len());
    let mut tiers = TierAssignment::default();

    for (rank, skill) in sorted.iter().enumerate() {
        let tier = if rank < cut1 {
            Tier::Foundational
        } else if rank < cut2 {
            Tier::Medium
        } else if rank < cut3 {
            Tier::Niche
        } else {
            Tier::AppliedHard
        };
        tiers.get_mut(tier).push(skill.name.clone());
    }

    tiers
}
