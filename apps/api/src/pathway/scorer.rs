//! Learning-Order Scorer: blends semantic rank with graph-connectivity rank.
//!
//! For each pruned skill: `n` = position in similarity order + 0.1, `m` = position in
//! degree order + 0.1, and `score = n + m + α·|n − m|`. Lower scores are taught first.
//! The penalty term pushes back skills whose two signals disagree sharply.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::pathway::cooccurrence::Subgraph;

/// Keeps the first-ranked skill's position away from zero.
const RANK_OFFSET: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSkill {
    pub name: String,
    pub input_rank: f64,
    pub degree_rank: f64,
    pub learning_score: f64,
}

/// Skill names sorted by degree descending. Ties keep subgraph (similarity) order.
pub fn degree_order(subgraph: &Subgraph) -> Vec<String> {
    let mut nodes: Vec<_> = subgraph.nodes.iter().collect();
    nodes.sort_by(|a, b| b.degree().cmp(&a.degree()));
    nodes.into_iter().map(|n| n.skill.clone()).collect()
}

pub fn learning_score(n: f64, m: f64, alpha: f64) -> f64 {
    n + m + alpha * (n - m).abs()
}

/// Scores every node of a pruned subgraph and returns them in learning order
/// (ascending score, stable on ties).
pub fn score(subgraph: &Subgraph, alpha: f64) -> Vec<ScoredSkill> {
    let degree_positions: HashMap<String, usize> = degree_order(subgraph)
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name, i))
        .collect();

    let mut scored: Vec<ScoredSkill> = subgraph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let n = i as f64 + RANK_OFFSET;
            let m = degree_positions[&node.skill] as f64 + RANK_OFFSET;
            ScoredSkill {
                name: node.skill.clone(),
                input_rank: n,
                degree_rank: m,
                learning_score: learning_score(n, m, alpha),
            }
        })
        .collect();

    scored.sort_by(|a, b| a.learning_score.total_cmp(&b.learning_score));
    scored
}
