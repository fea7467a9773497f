use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;

use crate::pathway::error::PathwayError;

/// Ordered skill name catalog with its positionally aligned embedding matrix.
///
/// Invariant: every name maps to exactly one row, and row `i` of `embeddings` belongs to
/// `names[i]`. Enforced at construction.
pub struct SkillCatalog {
    names: Vec<String>,
    positions: HashMap<String, usize>,
    embeddings: Arc<Vec<Vec<f32>>>,
}

impl SkillCatalog {
    pub fn new(names: Vec<String>, embeddings: Vec<Vec<f32>>) -> Result<Self> {
        anyhow::ensure!(
            names.len() == embeddings.len(),
            "skill catalog has {} names but {} embedding rows",
            names.len(),
            embeddings.len()
        );

        let dimension = embeddings.first().map(Vec::len).unwrap_or(0);
        if let Some(row) = embeddings.iter().position(|e| e.len() != dimension) {
            anyhow::bail!(
                "embedding row {row} has {} dims, expected {dimension}",
                embeddings[row].len()
            );
        }

        let mut positions = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if let Some(prev) = positions.insert(name.clone(), i) {
                anyhow::bail!("skill '{name}' appears at catalog rows {prev} and {i}");
            }
        }

        Ok(Self {
            names,
            positions,
            embeddings: Arc::new(embeddings),
        })
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Result<usize, PathwayError> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| PathwayError::UnknownSkill(name.to_string()))
    }

    pub fn embedding(&self, name: &str) -> Result<&[f32], PathwayError> {
        let index = self.index_of(name)?;
        Ok(&self.embeddings[index])
    }

    /// Shared handle to the embedding matrix, for building a search index over it.
    pub fn embeddings(&self) -> Arc<Vec<Vec<f32>>> {
        Arc::clone(&self.embeddings)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn dimension(&self) -> usize {
        self.embeddings.first().map(Vec::len).unwrap_or(0)
    }
}
