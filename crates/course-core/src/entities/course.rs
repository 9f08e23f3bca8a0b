//! Course entity - a sellable course with registration and class windows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(i16)]
pub enum CourseStatus {
    /// Being edited, not visible
    #[default]
    Draft = 0,
    /// Submitted for review
    Pending = 1,
    /// Open for registration
    Online = 2,
    /// Course finished
    Ended = 3,
    /// Registration temporarily paused
    Paused = 4,
}

impl CourseStatus {
    /// Get the numeric value as stored in the database
    #[inline]
    #[must_use]
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl From<i16> for CourseStatus {
    fn from(value: i16) -> Self {
        match value {
            1 => Self::Pending,
            2 => Self::Online,
            3 => Self::Ended,
            4 => Self::Paused,
            _ => Self::Draft, // Default for 0 and unknown values
        }
    }
}

impl From<CourseStatus> for i16 {
    fn from(status: CourseStatus) -> Self {
        status as i16
    }
}

/// Course entity
///
/// The registration window is expected to precede or overlap the class
/// window; that ordering is owned by the (absent) service layer and is not
/// enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Price in the smallest currency unit, never negative
    pub price: i64,
    pub max_students: i32,
    pub min_students: i32,
    pub registration_start_date: DateTime<Utc>,
    pub registration_end_date: DateTime<Utc>,
    /// Class window start
    pub start_date: DateTime<Utc>,
    /// Class window end
    pub end_date: DateTime<Utc>,
    pub is_online: bool,
    pub status: CourseStatus,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Create a new, not-yet-persisted Course in `Draft` status
    #[must_use]
    pub fn new(
        name: String,
        description: String,
        registration_start_date: DateTime<Utc>,
        registration_end_date: DateTime<Utc>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            description,
            price: 0,
            max_students: 0,
            min_students: 0,
            registration_start_date,
            registration_end_date,
            start_date,
            end_date,
            is_online: false,
            status: CourseStatus::Draft,
            note: String::new(),
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

    /// Check whether the course is open for registration
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.status, CourseStatus::Online)
    }

    /// Transition the publication status
    pub fn set_status(&mut self, status: CourseStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Update the price
    pub fn set_price(&mut self, price: i64) {
        self.price = price;
        self.updated_at = Utc::now();
    }
}

/// Composable filter predicates for course queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseFilter {
    /// Case-sensitive substring match on the course name
    NameContains(String),
    /// Status is a member of the given set; an empty set matches nothing
    StatusIn(Vec<CourseStatus>),
    /// Online/offline flag match
    Online(bool),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_course() -> Course {
        let reg_start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let reg_end = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap();
        Course::new(
            "Rust 101".to_string(),
            "Introduction to Rust".to_string(),
            reg_start,
            reg_end,
            start,
            end,
        )
    }

    #[test]
    fn test_status_from_i16() {
        assert_eq!(CourseStatus::from(0), CourseStatus::Draft);
        assert_eq!(CourseStatus::from(1), CourseStatus::Pending);
        assert_eq!(CourseStatus::from(2), CourseStatus::Online);
        assert_eq!(CourseStatus::from(3), CourseStatus::Ended);
        assert_eq!(CourseStatus::from(4), CourseStatus::Paused);
        assert_eq!(CourseStatus::from(99), CourseStatus::Draft); // Unknown defaults to draft
    }

    #[test]
    fn test_new_course_defaults() {
        let course = sample_course();
        assert_eq!(course.status, CourseStatus::Draft);
        assert_eq!(course.price, 0);
        assert_eq!(course.max_students, 0);
        assert!(!course.is_online);
        assert!(!course.is_persisted());
        assert!(!course.is_open());
    }

    #[test]
    fn test_set_status() {
        let mut course = sample_course();
        course.set_status(CourseStatus::Online);
        assert!(course.is_open());
    }
}
