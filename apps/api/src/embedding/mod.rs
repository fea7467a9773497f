//! Embedding collaborators: the only place the pathway core touches vectors from outside.
//!
//! The pipeline runs on a blocking worker, so both traits are synchronous. Calls are not
//! retried: a failure is surfaced as `PathwayError::UpstreamUnavailable` and fails the request.

use crate::pathway::error::PathwayError;

pub mod http;
pub mod index;

pub use http::HttpEmbedder;
pub use index::{FlatIpIndex, Neighbor, NearestNeighbors};

/// Maps text to a unit-length vector of fixed dimension. Must be deterministic per text.
pub trait Embedder: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<f32>, PathwayError>;
}

/// Cosine similarity. Returns 0.0 for mismatched lengths or zero vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Scales `v` to unit L2 norm in place. Zero vectors are left untouched.
pub fn normalize(v: &mut [f32]) {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        v.iter_mut().for_each(|x| *x /= norm);
    }
}
