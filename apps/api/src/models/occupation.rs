use serde::{Deserialize, Serialize};

/// One row of `detailed_occupations.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occupation {
    #[serde(rename = "SOC Title")]
    pub title: String,
    #[serde(rename = "SOC Definition", default)]
    pub definition: String,
}

impl Occupation {
    /// Text submitted to the embedding model for this occupation.
    pub fn query_text(&self) -> String {
        format!("{}: {}", self.title, self.definition)
    }
}
