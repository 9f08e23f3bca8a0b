//! Course database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the course table
#[derive(Debug, Clone, FromRow)]
pub struct CourseModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub max_students: i32,
    pub min_students: i32,
    pub registration_start_date: DateTime<Utc>,
    pub registration_end_date: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_online: bool,
    pub status: i16,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CourseModel {
    /// Check if the row is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
