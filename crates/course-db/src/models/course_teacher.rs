//! CourseTeacher database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the course_teacher join table
#[derive(Debug, Clone, FromRow)]
pub struct CourseTeacherModel {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub is_main: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
