use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::skill::SkillSpine;
use crate::pathway::error::PathwayError;
use crate::reference::read_json;

/// Skill statement / alignment metadata, merged from a directory of JSON partitions.
pub struct SkillSpineStore {
    by_name: HashMap<String, SkillSpine>,
}

impl SkillSpineStore {
    pub fn new(records: Vec<SkillSpine>) -> Self {
        let mut by_name = HashMap::with_capacity(records.len());
        for record in records {
            by_name.entry(record.skill_name.clone()).or_insert(record);
        }
        Self { by_name }
    }

    /// Reads every `*.json` file under `dir` (recursively, in path order).
    /// The first record for a name wins.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut files = Vec::new();
        collect_json_files(dir, &mut files)?;
        files.sort();

        let mut records = Vec::new();
        for path in &files {
            let mut partition: Vec<SkillSpine> = read_json(path)?;
            debug!("Loaded {} spine records from {}", partition.len(), path.display());
            records.append(&mut partition);
        }
        Ok(Self::new(records))
    }

    pub fn get(&self, skill: &str) -> Result<&SkillSpine, PathwayError> {
        self.by_name
            .get(skill)
            .ok_or_else(|| PathwayError::MissingMetadata(skill.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}

fn collect_json_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            collect_json_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            out.push(path);
        }
    }
    Ok(())
}
