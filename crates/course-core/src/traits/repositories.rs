//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. CRUD semantics shared by all entities:
//! `create` returns the database-generated identifier, `get_by_id` returns
//! a sentinel not-found error, while `update`/`delete` report a missing row
//! as zero rows affected with no error.

use async_trait::async_trait;

use crate::entities::{
    Course, CourseFilter, CoursePattern, CourseTeacher, Teacher, TeacherFilter,
};
use crate::error::DomainError;
use crate::query::PageInfo;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Teacher Repository
// ============================================================================

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Insert a new teacher and return the generated identifier.
    /// A colliding `user_id`, `phone`, or `email` yields a conflict error.
    async fn create(&self, teacher: &Teacher) -> RepoResult<i64>;

    /// Fetch a teacher by identifier, erroring when missing or soft-deleted
    async fn get_by_id(&self, id: i64) -> RepoResult<Teacher>;

    /// Update all mutable fields of an existing teacher, returning rows affected
    async fn update(&self, teacher: &Teacher) -> RepoResult<u64>;

    /// Soft delete a teacher, returning rows affected
    async fn delete(&self, id: i64) -> RepoResult<u64>;

    /// List teachers with pagination and conjunctive filters
    async fn find(&self, page: &PageInfo, filters: &[TeacherFilter]) -> RepoResult<Vec<Teacher>>;
}

// ============================================================================
// Course Repository
// ============================================================================

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert a new course and return the generated identifier
    async fn create(&self, course: &Course) -> RepoResult<i64>;

    /// Fetch a course by identifier, erroring when missing or soft-deleted
    async fn get_by_id(&self, id: i64) -> RepoResult<Course>;

    /// Update all mutable fields of an existing course, returning rows affected
    async fn update(&self, course: &Course) -> RepoResult<u64>;

    /// Soft delete a course, returning rows affected
    async fn delete(&self, id: i64) -> RepoResult<u64>;

    /// List courses with pagination and conjunctive filters
    async fn find(&self, page: &PageInfo, filters: &[CourseFilter]) -> RepoResult<Vec<Course>>;
}

// ============================================================================
// CourseTeacher Repository
// ============================================================================

#[async_trait]
pub trait CourseTeacherRepository: Send + Sync {
    /// Assign a teacher to a course and return the generated identifier.
    /// A duplicate (course, teacher) pair yields a conflict error.
    async fn create(&self, assignment: &CourseTeacher) -> RepoResult<i64>;

    /// List all assignments for a course
    async fn find_by_course(&self, course_id: i64) -> RepoResult<Vec<CourseTeacher>>;

    /// Remove a teacher from a course, returning rows affected
    async fn delete(&self, course_id: i64, teacher_id: i64) -> RepoResult<u64>;
}

// ============================================================================
// CoursePattern Repository
// ============================================================================

#[async_trait]
pub trait CoursePatternRepository: Send + Sync {
    /// Add a weekly schedule slot and return the generated identifier
    async fn create(&self, pattern: &CoursePattern) -> RepoResult<i64>;

    /// List all schedule slots for a course, ordered by day of week
    async fn find_by_course(&self, course_id: i64) -> RepoResult<Vec<CoursePattern>>;

    /// Remove a schedule slot, returning rows affected
    async fn delete(&self, id: i64) -> RepoResult<u64>;
}
