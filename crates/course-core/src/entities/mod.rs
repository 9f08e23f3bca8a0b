//! Domain entities - persisted record types

mod course;
mod course_pattern;
mod course_teacher;
mod teacher;

pub use course::{Course, CourseFilter, CourseStatus};
pub use course_pattern::CoursePattern;
pub use course_teacher::CourseTeacher;
pub use teacher::{Teacher, TeacherFilter, TeacherStatus};
