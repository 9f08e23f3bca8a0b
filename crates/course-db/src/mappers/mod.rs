//! Entity ↔ Model mappers
//!
//! `From<Model>` impls convert rows back into domain entities; inserts and
//! updates bind entity fields directly in the repositories.

mod course;
mod course_pattern;
mod course_teacher;
mod teacher;
