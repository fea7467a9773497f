use serde::{Deserialize, Serialize};

/// A course from `courses.json`. Serialized as-is into pathway nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_title: String,
    #[serde(default)]
    pub course_desc: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Course {
    /// Text submitted to the embedding model when ranking this course.
    pub fn embedding_text(&self) -> String {
        format!("{}: {}", self.course_title, self.course_desc)
    }
}
