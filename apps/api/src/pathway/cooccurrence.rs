//! Co-occurrence Subgraph Builder + Pruner.
//!
//! Two skills are neighbors when at least one course teaches both. The full graph is
//! built once from the skill→course mapping; each request restricts it to its candidates
//! and prunes zero-degree nodes to a fixed point, since degree feeds the learning score.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::debug;

use crate::reference::SkillCourseMap;

/// Undirected skill graph without self-loops.
#[derive(Debug, Clone, Default)]
pub struct CoOccurrenceGraph {
    neighbors: BTreeMap<String, BTreeSet<String>>,
}

impl CoOccurrenceGraph {
    pub fn from_skill_courses(map: &SkillCourseMap) -> Self {
        let mut course_to_skills: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for (skill, courses) in map.iter() {
            for course in courses {
                course_to_skills
                    .entry(course.as_str())
                    .or_default()
                    .insert(skill.as_str());
            }
        }

        let mut neighbors = BTreeMap::new();
        for (skill, courses) in map.iter() {
            let mut connected: BTreeSet<String> = courses
                .iter()
                .filter_map(|c| course_to_skills.get(c.as_str()))
                .flatten()
                .map(|s| s.to_string())
                .collect();
            connected.remove(skill);
            neighbors.insert(skill.clone(), connected);
        }

        Self { neighbors }
    }

    pub fn neighbors(&self, skill: &str) -> Option<&BTreeSet<String>> {
        self.neighbors.get(skill)
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Restricts the graph to `candidates`, keeping their order. Neighbor lists follow
    /// candidate order. Candidates unknown to the graph get an empty neighbor list.
    pub fn restrict(&self, candidates: &[String]) -> Subgraph {
        let mut seen = HashSet::new();

        let nodes = candidates
            .iter()
            .filter(|skill| seen.insert(skill.as_str()))
            .map(|skill| {
                let neighbors = match self.neighbors.get(skill) {
                    Some(all) => candidates
                        .iter()
                        .filter(|c| all.contains(c.as_str()))
                        .cloned()
                        .collect::<Vec<_>>(),
                    None => Vec::new(),
                };
                SubgraphNode {
                    skill: skill.clone(),
                    neighbors: dedup_preserving_order(neighbors),
                }
            })
            .collect();

        Subgraph { nodes }
    }
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|s| seen.insert(s.clone())).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubgraphNode {
    pub skill: String,
    pub neighbors: Vec<String>,
}

impl SubgraphNode {
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Candidate-restricted graph. Node order is the candidates' similarity order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subgraph {
    pub nodes: Vec<SubgraphNode>,
}

impl Subgraph {
    /// Removes zero-degree nodes until none remain. Idempotent.
    pub fn prune(mut self) -> Self {
        let mut round = 0;
        loop {
            let isolated: HashSet<String> = self
                .nodes
                .iter()
                .filter(|n| n.neighbors.is_empty())
                .map(|n| n.skill.clone())
                .collect();
            if isolated.is_empty() {
                break;
            }
            round += 1;
            debug!("Prune round {round}: removing {} isolated skills", isolated.len());

            self.nodes.retain(|n| !isolated.contains(&n.skill));
            for node in &mut self.nodes {
                node.neighbors.retain(|s| !isolated.contains(s));
            }
        }
        self
    }

    /// Skill names in node order.
    pub fn skills(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.skill.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &[&str])]) -> SkillCourseMap {
        SkillCourseMap::new(
            entries
                .iter()
                .map(|(skill, courses)| {
                    (
                        skill.to_string(),
                        courses.iter().map(|c| c.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// c1 teaches {A, B}, c2 teaches {B, C}; D has no course.
    fn abcd_graph() -> CoOccurrenceGraph {
        CoOccurrenceGraph::from_skill_courses(&map(&[
            ("A", &["c1"]),
            ("B", &["c1", "c2"]),
            ("C", &["c2"]),
        ]))
    }

    #[test]
    fn test_full_graph_is_symmetric_without_self_loops() {
        let graph = abcd_graph();
        assert_eq!(graph.len(), 3);
        assert!(graph.neighbors("B").unwrap().contains("A"));
        assert!(graph.neighbors("A").unwrap().contains("B"));
        assert!(!graph.neighbors("A").unwrap().contains("C"));
        assert!(!graph.neighbors("B").unwrap().contains("B"));
    }

    #[test]
    fn test_restrict_abcd_before_pruning() {
        let sub = abcd_graph().restrict(&names(&["A", "B", "C", "D"]));
        assert_eq!(sub.nodes[0].neighbors, names(&["B"]));
        assert_eq!(sub.nodes[1].neighbors, names(&["A", "C"]));
        assert_eq!(sub.nodes[2].neighbors, names(&["B"]));
        assert_eq!(sub.nodes[3].skill, "D");
        assert!(sub.nodes[3].neighbors.is_empty());
    }

    #[test]
    fn test_prune_removes_isolated_node() {
        let pruned = abcd_graph().restrict(&names(&["A", "B", "C", "D"])).prune();
        assert_eq!(pruned.skills(), names(&["A", "B", "C"]));
        assert_eq!(pruned.nodes[1].degree(), 2);
    }

    #[test]
    fn test_restrict_drops_neighbors_outside_candidates() {
        let sub = abcd_graph().restrict(&names(&["A", "C"]));
        assert!(sub.nodes.iter().all(|n| n.neighbors.is_empty()));
        assert!(sub.prune().is_empty());
    }

    #[test]
    fn test_prune_cascades_to_fixed_point() {
        // Hand-built: X only links to Y, which is isolated after the first round.
        let sub = Subgraph {
            nodes: vec![
                SubgraphNode { skill: "X".to_string(), neighbors: names(&["Y"]) },
                SubgraphNode { skill: "Y".to_string(), neighbors: names(&["Z"]) },
                SubgraphNode { skill: "Z".to_string(), neighbors: vec![] },
                SubgraphNode { skill: "P".to_string(), neighbors: names(&["Q"]) },
                SubgraphNode { skill: "Q".to_string(), neighbors: names(&["P"]) },
            ],
        };
        let pruned = sub.prune();
        assert_eq!(pruned.skills(), names(&["P", "Q"]));
    }

    #[test]
    fn test_prune_is_idempotent() {
        let once = abcd_graph().restrict(&names(&["D", "C", "B", "A"])).prune();
        let twice = once.clone().prune();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_restrict_keeps_candidate_order() {
        let sub = abcd_graph().restrict(&names(&["C", "A", "B"]));
        assert_eq!(sub.skills(), names(&["C", "A", "B"]));
        assert_eq!(sub.nodes[2].neighbors, names(&["C", "A"]));
    }
}
