//! Teacher database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the teacher table
#[derive(Debug, Clone, FromRow)]
pub struct TeacherModel {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub bio: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TeacherModel {
    /// Check if the row is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
