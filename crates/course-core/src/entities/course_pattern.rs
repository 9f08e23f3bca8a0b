//! CoursePattern entity - recurring weekly schedule slot for a course

use chrono::{DateTime, Utc};

/// Weekly schedule slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursePattern {
    pub id: i64,
    pub course_id: i64,
    /// Day of week, 0 = Sunday through 6 = Saturday
    pub day_of_week: i16,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CoursePattern {
    /// Create a new, not-yet-persisted schedule slot
    #[must_use]
    pub fn new(
        course_id: i64,
        day_of_week: i16,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            course_id,
            day_of_week,
            start_time,
            end_time,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_pattern() {
        let start = Utc.with_ymd_and_hms(2025, 2, 3, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 2, 3, 11, 0, 0).unwrap();
        let pattern = CoursePattern::new(10, 1, start, end);
        assert_eq!(pattern.course_id, 10);
        assert_eq!(pattern.day_of_week, 1);
        assert!(pattern.start_time < pattern.end_time);
    }
}
