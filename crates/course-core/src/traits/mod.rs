//! Repository traits

mod repositories;

pub use repositories::{
    CoursePatternRepository, CourseRepository, CourseTeacherRepository, RepoResult,
    TeacherRepository,
};
