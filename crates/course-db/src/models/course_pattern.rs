//! CoursePattern database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the course_pattern table
#[derive(Debug, Clone, FromRow)]
pub struct CoursePatternModel {
    pub id: i64,
    pub course_id: i64,
    pub day_of_week: i16,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
