//! Shared in-memory fixtures for pathway tests.
//!
//! Skills `s0..s11` sit on the unit circle at angle `0.1·i`, so similarity to the target
//! occupation ([1, 0]) falls with `i` and similarity to the current occupation ([0, 1])
//! rises with it. Course `c{i}` teaches `s{i}` and `s{i+1}`, making the co-occurrence graph
//! a chain. `orphan` has an embedding but no course.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::embedding::Embedder;
use crate::models::course::Course;
use crate::models::occupation::Occupation;
use crate::models::skill::SkillSpine;
use crate::pathway::context::{PathwayContext, PathwayParams};
use crate::pathway::error::PathwayError;
use crate::reference::{
    CourseCatalog, OccupationCatalog, ReferenceData, SkillCatalog, SkillCourseMap, SkillSpineStore,
};

pub const TARGET: &str = "Data Scientists";
pub const CURRENT: &str = "Statisticians";
pub const SKILL_COUNT: usize = 12;

/// Embedder backed by a fixed text→vector table. Unknown text maps to `fallback`.
pub struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fallback: Vec<f32>,
    calls: AtomicUsize,
}

impl StubEmbedder {
    pub fn new(vectors: HashMap<String, Vec<f32>>, fallback: Vec<f32>) -> Self {
        Self {
            vectors,
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for StubEmbedder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, PathwayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}

/// Embedder that always fails, standing in for an unreachable model server.
pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn encode(&self, _text: &str) -> Result<Vec<f32>, PathwayError> {
        Err(PathwayError::UpstreamUnavailable("connection refused".to_string()))
    }
}

pub fn skill_name(i: usize) -> String {
    format!("s{i}")
}

pub fn unit(angle: f32) -> Vec<f32> {
    vec![angle.cos(), angle.sin()]
}

pub fn occupations() -> Vec<Occupation> {
    vec![
        Occupation {
            title: TARGET.to_string(),
            definition: "Analyze data.".to_string(),
        },
        Occupation {
            title: CURRENT.to_string(),
            definition: "Model uncertainty.".to_string(),
        },
    ]
}

pub fn course(title: &str, skills: &[String]) -> Course {
    Course {
        course_title: title.to_string(),
        course_desc: format!("About {title}"),
        skills: skills.to_vec(),
    }
}

pub fn reference_data() -> ReferenceData {
    let mut names: Vec<String> = (0..SKILL_COUNT).map(skill_name).collect();
    let mut embeddings: Vec<Vec<f32>> = (0..SKILL_COUNT).map(|i| unit(0.1 * i as f32)).collect();
    // Closest to the target of all, but untaught.
    names.insert(0, "orphan".to_string());
    embeddings.insert(0, unit(0.0));

    let courses: Vec<Course> = (0..SKILL_COUNT - 1)
        .map(|i| course(&format!("c{i}"), &[skill_name(i), skill_name(i + 1)]))
        .collect();

    let mut skills_to_courses: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for c in &courses {
        for skill in &c.skills {
            skills_to_courses
                .entry(skill.clone())
                .or_default()
                .push(c.course_title.clone());
        }
    }

    // s3 has no spine record.
    let spine = (0..SKILL_COUNT)
        .filter(|&i| i != 3)
        .map(|i| SkillSpine {
            skill_name: skill_name(i),
            skill_statement: format!("Statement for s{i}"),
            alignment_name: "Data".to_string(),
        })
        .collect();

    ReferenceData {
        occupations: OccupationCatalog::new(occupations()),
        skills: SkillCatalog::new(names, embeddings).expect("fixture catalog is aligned"),
        courses: CourseCatalog::new(courses),
        skill_courses: SkillCourseMap::new(skills_to_courses),
        spine: SkillSpineStore::new(spine),
    }
}

pub fn stub_embedder() -> StubEmbedder {
    let mut vectors = HashMap::new();
    for occupation in occupations() {
        let v = if occupation.title == TARGET {
            vec![1.0, 0.0]
        } else {
            vec![0.0, 1.0]
        };
        vectors.insert(occupation.query_text(), v);
    }
    StubEmbedder::new(vectors, vec![0.0, 1.0])
}

pub fn context_with(embedder: Arc<dyn Embedder>, params: PathwayParams) -> PathwayContext {
    PathwayContext::new(reference_data(), embedder, params)
}

pub fn context() -> PathwayContext {
    context_with(Arc::new(stub_embedder()), PathwayParams::default())
}
