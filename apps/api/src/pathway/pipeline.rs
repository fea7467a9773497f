use tracing::{debug, info};

use crate::pathway::context::PathwayContext;
use crate::pathway::enricher::enrich;
use crate::pathway::error::PathwayError;
use crate::pathway::export::{serialize, PathwayExport};
use crate::pathway::linker::link;
use crate::pathway::scorer::score;
use crate::pathway::selector::select_candidates;
use crate::pathway::tiers::{categorize, Tier};

/// Builds the learning pathway from `current_title` to `target_title`.
///
/// Steps:
/// 1. Resolve both occupations (NotFound before any encoding)
/// 2. Encode both occupation texts
/// 3. select_candidates() → course-backed target skills + current-job skill set
/// 4. restrict + prune the co-occurrence graph
/// 5. score() → learning order
/// 6. categorize() → four tiers
/// 7. enrich() → metadata and ranked courses
/// 8. link() → skill tree
/// 9. serialize() + mark_matches() → export
///
/// Synchronous and blocking; callers on an async runtime use `spawn_blocking`.
pub fn build_pathway(
    ctx: &PathwayContext,
    current_title: &str,
    target_title: &str,
) -> Result<PathwayExport, PathwayError> {
    let data = &ctx.data;
    let params = &ctx.params;

    // Step 1
    let target = data.occupations.find(target_title)?;
    let current = data.occupations.find(current_title)?;

    // Step 2
    let target_vec = ctx.embedder.encode(&target.query_text())?;
    let current_vec = ctx.embedder.encode(&current.query_text())?;

    // Step 3
    let candidates = select_candidates(
        ctx.index.as_ref(),
        &data.skills,
        &data.courses,
        &target_vec,
        &current_vec,
        params,
    )?;
    info!(
        "Selected {} candidate skills for '{}' ({} current-job skills)",
        candidates.ranked.len(),
        target.title,
        candidates.current_skills.len()
    );

    // Step 4
    let subgraph = ctx.graph.restrict(&candidates.names()).prune();
    info!(
        "Co-occurrence subgraph: {} of {} candidates survive pruning",
        subgraph.len(),
        candidates.ranked.len()
    );

    // Step 5
    let scored = score(&subgraph, params.alpha);

    // Step 6
    let tiers = categorize(&scored);
    debug!(
        "Tier sizes: {}",
        Tier::ORDER
            .iter()
            .map(|t| format!("{t}={}", tiers.get(*t).len()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    // Step 7
    let enriched = enrich(
        &tiers,
        &data.spine,
        &data.courses,
        &target_vec,
        ctx.embedder.as_ref(),
        params.course_threshold,
    )?;

    // Step 8
    let tree = link(&tiers, &data.skills)?;
    debug!("Linked skill tree with {} edges", tree.edge_count());

    // Step 9
    let mut export = serialize(&tree, &enriched);
    export.mark_matches(&candidates.current_skills);

    info!(
        "Pathway '{}' → '{}': {} nodes, {} edges, {} matched",
        current.title,
        target.title,
        export.nodes.len(),
        export.edges.len(),
        export.match_count()
    );

    Ok(export)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::embedding::{Neighbor, NearestNeighbors};
    use crate::pathway::context::PathwayParams;
    use crate::pathway::fixtures::{self, CURRENT, TARGET};
    use crate::pathway::linker::ROOT;

    #[test]
    fn test_full_pathway_shape() {
        let ctx = fixtures::context();
        let export = build_pathway(&ctx, CURRENT, TARGET).unwrap();

        // 12 skills + root; every non-root node has exactly one incoming edge.
        assert_eq!(export.nodes.len(), fixtures::SKILL_COUNT + 1);
        assert_eq!(export.edges.len(), fixtures::SKILL_COUNT);
        assert_eq!(export.nodes[0].id, ROOT);

        let names: HashSet<&str> = export.nodes.iter().map(|n| n.skill_name.as_str()).collect();
        assert_eq!(names.len(), export.nodes.len(), "duplicate node in export");
        assert!(!names.contains("orphan"));

        for node in &export.nodes[1..] {
            let parents = export.edges.iter().filter(|e| e.to == node.id).count();
            assert_eq!(parents, 1, "{} has {parents} parents", node.id);
        }
        assert!(export.edges.iter().all(|e| e.to != ROOT));
    }

    #[test]
    fn test_chain_graph_tiers() {
        // N=12 → cuts 1 / 3 / 9: one foundational skill under root.
        let ctx = fixtures::context();
        let export = build_pathway(&ctx, CURRENT, TARGET).unwrap();
        let root_children = export.edges.iter().filter(|e| e.from == ROOT).count();
        assert_eq!(root_children, 1);
    }

    #[test]
    fn test_every_node_has_courses() {
        let ctx = fixtures::context();
        let export = build_pathway(&ctx, CURRENT, TARGET).unwrap();
        assert!(export.nodes[1..].iter().all(|n| !n.courses.is_empty()));
    }

    #[test]
    fn test_missing_spine_record_yields_empty_description() {
        let ctx = fixtures::context();
        let export = build_pathway(&ctx, CURRENT, TARGET).unwrap();
        let s3 = export.nodes.iter().find(|n| n.skill_name == "s3").unwrap();
        assert_eq!(s3.description, "");
        let s4 = export.nodes.iter().find(|n| n.skill_name == "s4").unwrap();
        assert_eq!(s4.description, "Statement for s4");
    }

    #[test]
    fn test_matches_follow_current_job_skills() {
        let params = PathwayParams {
            current_search_k: 3,
            ..PathwayParams::default()
        };
        let ctx = fixtures::context_with(Arc::new(fixtures::stub_embedder()), params);
        let export = build_pathway(&ctx, CURRENT, TARGET).unwrap();
        let matched: HashSet<&str> = export
            .nodes
            .iter()
            .filter(|n| n.is_match)
            .map(|n| n.skill_name.as_str())
            .collect();
        assert_eq!(matched, ["s9", "s10", "s11"].into_iter().collect());
    }

    #[test]
    fn test_no_overlap_no_matches() {
        // Current occupation encodes like the target, so its single nearest skill is the
        // untaught orphan, which never reaches the tree.
        let embedder = fixtures::StubEmbedder::new(
            fixtures::occupations()
                .iter()
                .map(|o| (o.query_text(), vec![1.0, 0.0]))
                .collect(),
            vec![0.0, 1.0],
        );
        let params = PathwayParams {
            current_search_k: 1,
            ..PathwayParams::default()
        };
        let ctx = fixtures::context_with(Arc::new(embedder), params);
        let export = build_pathway(&ctx, CURRENT, TARGET).unwrap();
        assert_eq!(export.match_count(), 0);
    }

    #[test]
    fn test_unknown_title_fails_before_encoding() {
        let embedder = Arc::new(fixtures::stub_embedder());
        let ctx = fixtures::context_with(embedder.clone(), PathwayParams::default());

        let err = build_pathway(&ctx, CURRENT, "Astronauts").unwrap_err();
        assert!(matches!(err, PathwayError::NotFound(t) if t == "Astronauts"));
        let err = build_pathway(&ctx, "Astronauts", TARGET).unwrap_err();
        assert!(matches!(err, PathwayError::NotFound(_)));
        assert_eq!(embedder.calls(), 0);
    }

    #[test]
    fn test_too_few_skills_is_empty_tier() {
        // N=5 → floor(0.5) = 0 foundational skills, but one medium skill.
        let params = PathwayParams {
            max_skills: 5,
            ..PathwayParams::default()
        };
        let ctx = fixtures::context_with(Arc::new(fixtures::stub_embedder()), params);
        let err = build_pathway(&ctx, CURRENT, TARGET).unwrap_err();
        assert!(matches!(
            err,
            PathwayError::EmptyTier {
                tier: Tier::Foundational,
                dependent: Tier::Medium
            }
        ));
    }

    #[test]
    fn test_embedder_failure_is_upstream_error() {
        let ctx = fixtures::context_with(Arc::new(fixtures::FailingEmbedder), PathwayParams::default());
        let err = build_pathway(&ctx, CURRENT, TARGET).unwrap_err();
        assert!(matches!(err, PathwayError::UpstreamUnavailable(_)));
    }

    struct DownIndex;

    impl NearestNeighbors for DownIndex {
        fn search(&self, _query: &[f32], _k: usize) -> Result<Vec<Neighbor>, PathwayError> {
            Err(PathwayError::UpstreamUnavailable("index offline".to_string()))
        }
    }

    #[test]
    fn test_search_failure_is_upstream_error() {
        let ctx = PathwayContext::with_index(
            fixtures::reference_data(),
            Arc::new(fixtures::stub_embedder()),
            Arc::new(DownIndex),
            PathwayParams::default(),
        );
        let err = build_pathway(&ctx, CURRENT, TARGET).unwrap_err();
        assert!(matches!(err, PathwayError::UpstreamUnavailable(_)));
    }

    #[test]
    fn test_same_request_is_deterministic() {
        let ctx = fixtures::context();
        let first = build_pathway(&ctx, CURRENT, TARGET).unwrap();
        let second = build_pathway(&ctx, CURRENT, TARGET).unwrap();
        assert_eq!(first, second);
    }
}
