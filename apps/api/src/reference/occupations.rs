use crate::models::occupation::Occupation;
use crate::pathway::error::PathwayError;

/// Occupation list, looked up by exact title.
pub struct OccupationCatalog {
    occupations: Vec<Occupation>,
}

impl OccupationCatalog {
    pub fn new(occupations: Vec<Occupation>) -> Self {
        Self { occupations }
    }

    /// Finds an occupation by exact title. The last entry wins when titles repeat.
    pub fn find(&self, title: &str) -> Result<&Occupation, PathwayError> {
        self.occupations
            .iter()
            .rev()
            .find(|o| o.title == title)
            .ok_or_else(|| PathwayError::NotFound(title.to_string()))
    }

    pub fn titles(&self) -> Vec<&str> {
        self.occupations.iter().map(|o| o.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.occupations.len()
    }
}
