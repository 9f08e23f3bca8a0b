//! Database models
//!
//! Row types matching the table schemas, with SQLx `FromRow` derives.
//! Status enums are stored as SMALLINT; the mappers convert back to the
//! domain enums.

mod course;
mod course_pattern;
mod course_teacher;
mod teacher;

pub use course::CourseModel;
pub use course_pattern::CoursePatternModel;
pub use course_teacher::CourseTeacherModel;
pub use teacher::TeacherModel;
