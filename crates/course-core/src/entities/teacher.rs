//! Teacher entity - represents a registered instructor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review status of a teacher account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(i16)]
pub enum TeacherStatus {
    /// Registration submitted, awaiting review
    #[default]
    Pending = 0,
    /// Review passed, teacher may be assigned to courses
    Approved = 1,
    /// Review failed
    Rejected = 2,
    /// Account disabled by an administrator
    Disabled = 3,
}

impl TeacherStatus {
    /// Get the numeric value as stored in the database
    #[inline]
    #[must_use]
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl From<i16> for TeacherStatus {
    fn from(value: i16) -> Self {
        match value {
            1 => Self::Approved,
            2 => Self::Rejected,
            3 => Self::Disabled,
            _ => Self::Pending, // Default for 0 and unknown values
        }
    }
}

impl From<TeacherStatus> for i16 {
    fn from(status: TeacherStatus) -> Self {
        status as i16
    }
}

/// Teacher entity
///
/// `user_id`, `phone`, and `email` are each unique across all teachers.
/// An `id` of 0 marks an entity that has not been persisted yet; the
/// database assigns the real identifier on create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: i64,
    /// Associated user account ID
    pub user_id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub bio: String,
    pub status: TeacherStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Teacher {
    /// Create a new, not-yet-persisted Teacher in `Pending` status
    #[must_use]
    pub fn new(user_id: i64, name: String, phone: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            name,
            phone,
            email,
            bio: String::new(),
            status: TeacherStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this entity has been persisted
    #[inline]
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Check whether the teacher passed review
    #[inline]
    #[must_use]
    pub fn is_approved(&self) -> bool {
        matches!(self.status, TeacherStatus::Approved)
    }

    /// Transition the review status
    pub fn set_status(&mut self, status: TeacherStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Update the bio text
    pub fn set_bio(&mut self, bio: String) {
        self.bio = bio;
        self.updated_at = Utc::now();
    }
}

/// Composable filter predicates for teacher queries.
///
/// Filters combine conjunctively; the query layer interprets each variant
/// into a WHERE condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeacherFilter {
    /// Case-sensitive substring match on the teacher name
    NameContains(String),
    /// Status is a member of the given set; an empty set matches nothing
    StatusIn(Vec<TeacherStatus>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_i16() {
        assert_eq!(TeacherStatus::from(0), TeacherStatus::Pending);
        assert_eq!(TeacherStatus::from(1), TeacherStatus::Approved);
        assert_eq!(TeacherStatus::from(2), TeacherStatus::Rejected);
        assert_eq!(TeacherStatus::from(3), TeacherStatus::Disabled);
        assert_eq!(TeacherStatus::from(99), TeacherStatus::Pending); // Unknown defaults to pending
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            TeacherStatus::Pending,
            TeacherStatus::Approved,
            TeacherStatus::Rejected,
            TeacherStatus::Disabled,
        ] {
            assert_eq!(TeacherStatus::from(status.as_i16()), status);
        }
    }

    #[test]
    fn test_new_teacher_defaults() {
        let teacher = Teacher::new(
            1,
            "John Doe".to_string(),
            "1234567890".to_string(),
            "john.doe@example.com".to_string(),
        );
        assert_eq!(teacher.status, TeacherStatus::Pending);
        assert!(!teacher.is_persisted());
        assert!(!teacher.is_approved());
        assert!(teacher.bio.is_empty());
    }

    #[test]
    fn test_set_status() {
        let mut teacher = Teacher::new(
            1,
            "John Doe".to_string(),
            "1234567890".to_string(),
            "john.doe@example.com".to_string(),
        );
        teacher.set_status(TeacherStatus::Approved);
        assert!(teacher.is_approved());
    }
}
