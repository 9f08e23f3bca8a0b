//! CourseTeacher entity - join record linking a course and a teacher

use chrono::{DateTime, Utc};

/// Course/teacher assignment
///
/// The (`course_id`, `teacher_id`) pair is unique; at most one assignment
/// per course carries `is_main = true` by convention (not enforced here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTeacher {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    /// Marks the primary instructor for the course
    pub is_main: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourseTeacher {
    /// Create a new, not-yet-persisted assignment
    #[must_use]
    pub fn new(course_id: i64, teacher_id: i64, is_main: bool) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            course_id,
            teacher_id,
            is_main,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assignment() {
        let assignment = CourseTeacher::new(10, 20, true);
        assert_eq!(assignment.id, 0);
        assert_eq!(assignment.course_id, 10);
        assert_eq!(assignment.teacher_id, 20);
        assert!(assignment.is_main);
    }
}
