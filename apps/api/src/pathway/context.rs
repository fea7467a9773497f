use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::embedding::{Embedder, FlatIpIndex, NearestNeighbors};
use crate::pathway::cooccurrence::CoOccurrenceGraph;
use crate::reference::ReferenceData;

/// Tunables for one pathway computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathwayParams {
    /// Nearest skills retrieved for the target occupation.
    pub target_search_k: usize,
    /// Cap on course-backed candidate skills.
    pub max_skills: usize,
    /// Nearest skills retrieved for the current occupation (overlap marking only).
    pub current_search_k: usize,
    /// Weight of the rank-disagreement penalty in the learning score.
    pub alpha: f64,
    /// Minimum course/occupation cosine similarity to recommend a course.
    pub course_threshold: f32,
}

impl Default for PathwayParams {
    fn default() -> Self {
        Self {
            target_search_k: 300,
            max_skills: 60,
            current_search_k: 100,
            alpha: 0.1,
            course_threshold: 0.5,
        }
    }
}

/// Everything a pathway request reads: reference data, derived graph, and collaborators.
/// Built once per process and shared read-only behind an `Arc`.
pub struct PathwayContext {
    pub data: ReferenceData,
    pub graph: CoOccurrenceGraph,
    pub embedder: Arc<dyn Embedder>,
    pub index: Arc<dyn NearestNeighbors>,
    pub params: PathwayParams,
}

impl PathwayContext {
    /// Builds the context with a flat inner-product index over the catalog embeddings.
    pub fn new(data: ReferenceData, embedder: Arc<dyn Embedder>, params: PathwayParams) -> Self {
        let index = FlatIpIndex::new(data.skills.embeddings());
        info!(
            "Flat skill index: {} vectors, {} dims",
            index.len(),
            index.dimension()
        );
        let index = Arc::new(index);
        Self::with_index(data, embedder, index, params)
    }

    pub fn with_index(
        data: ReferenceData,
        embedder: Arc<dyn Embedder>,
        index: Arc<dyn NearestNeighbors>,
        params: PathwayParams,
    ) -> Self {
        let graph = CoOccurrenceGraph::from_skill_courses(&data.skill_courses);
        info!("Co-occurrence graph built over {} skills", graph.len());
        Self {
            data,
            graph,
            embedder,
            index,
            params,
        }
    }
}
