//! Exhaustive inner-product index over the skill embedding matrix.
//!
//! Catalog vectors are unit-normalized, so inner product equals cosine similarity.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::pathway::error::PathwayError;

/// One search hit: catalog row index and its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub score: f32,
}

/// Top-K search over the skill catalog, ordered by descending cosine similarity.
pub trait NearestNeighbors: Send + Sync {
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, PathwayError>;
}

/// Flat (brute-force) inner-product index. Shares the embedding matrix with the catalog.
pub struct FlatIpIndex {
    vectors: Arc<Vec<Vec<f32>>>,
    dimension: usize,
}

impl FlatIpIndex {
    pub fn new(vectors: Arc<Vec<Vec<f32>>>) -> Self {
        let dimension = vectors.first().map(Vec::len).unwrap_or(0);
        Self { vectors, dimension }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl NearestNeighbors for FlatIpIndex {
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, PathwayError> {
        if query.len() != self.dimension {
            return Err(PathwayError::UpstreamUnavailable(format!(
                "query has {} dims, index expects {}",
                query.len(),
                self.dimension
            )));
        }

        let mut hits: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, v)| Neighbor {
                index,
                score: v.iter().zip(query).map(|(a, b)| a * b).sum(),
            })
            .collect();

        // Stable sort: equal scores keep catalog order.
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(k);
        Ok(hits)
    }
}
