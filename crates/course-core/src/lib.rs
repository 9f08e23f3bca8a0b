//! # course-core
//!
//! Domain layer containing entities, query types, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, async runtime, etc.).

pub mod entities;
pub mod error;
pub mod query;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Course, CourseFilter, CoursePattern, CourseStatus, CourseTeacher, Teacher, TeacherFilter,
    TeacherStatus,
};
pub use error::DomainError;
pub use query::{PageInfo, SortOrder};
pub use traits::{
    CoursePatternRepository, CourseRepository, CourseTeacherRepository, RepoResult,
    TeacherRepository,
};
