use serde::{Deserialize, Serialize};

/// Descriptive skill metadata, one record per skill across the `skillsRSD` partitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSpine {
    #[serde(rename = "RSD Name")]
    pub skill_name: String,
    #[serde(rename = "Skill Statement", default)]
    pub skill_statement: String,
    #[serde(rename = "Alignment Name", default)]
    pub alignment_name: String,
}
