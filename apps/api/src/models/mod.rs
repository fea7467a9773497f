pub mod course;
pub mod occupation;
pub mod skill;
