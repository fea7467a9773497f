use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::models::course::Course;

/// Course catalog with a reverse index from skill name to the courses teaching it.
pub struct CourseCatalog {
    courses: Vec<Course>,
    by_skill: HashMap<String, Vec<usize>>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        let mut by_skill: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, course) in courses.iter().enumerate() {
            for skill in &course.skills {
                let entry = by_skill.entry(skill.clone()).or_default();
                // A course listing a skill twice still counts once.
                if entry.last() != Some(&i) {
                    entry.push(i);
                }
            }
        }
        Self { courses, by_skill }
    }

    /// Courses teaching `skill`, in catalog order.
    pub fn courses_for(&self, skill: &str) -> Vec<&Course> {
        self.by_skill
            .get(skill)
            .map(|idxs| idxs.iter().map(|&i| &self.courses[i]).collect())
            .unwrap_or_default()
    }

    pub fn has_courses(&self, skill: &str) -> bool {
        self.by_skill.get(skill).is_some_and(|idxs| !idxs.is_empty())
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }
}

/// `courses_with_skills.json`: skill name → titles of the courses that teach it.
/// Source of the co-occurrence graph.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillCourseMap {
    #[serde(rename = "skills_to_courses")]
    skills_to_courses: BTreeMap<String, Vec<String>>,
}

impl SkillCourseMap {
    pub fn new(skills_to_courses: BTreeMap<String, Vec<String>>) -> Self {
        Self { skills_to_courses }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.skills_to_courses.iter()
    }
}
