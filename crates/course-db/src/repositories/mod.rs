//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in course-core.
//! Each repository handles database operations for a specific domain entity.

mod course;
mod course_pattern;
mod course_teacher;
mod error;
mod query;
mod teacher;

pub use course::PgCourseRepository;
pub use course_pattern::PgCoursePatternRepository;
pub use course_teacher::PgCourseTeacherRepository;
pub use teacher::PgTeacherRepository;
