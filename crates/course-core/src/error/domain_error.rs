//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Not-found errors are sentinels returned by `get_by_id`; `update` and
/// `delete` report a missing row as zero rows affected instead. Conflict
/// errors map unique-constraint violations back to the caller.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Teacher not found: {0}")]
    TeacherNotFound(i64),

    #[error("Course not found: {0}")]
    CourseNotFound(i64),

    // =========================================================================
    // Conflict Errors (unique-constraint violations)
    // =========================================================================
    #[error("User is already registered as a teacher")]
    UserAlreadyRegistered,

    #[error("Phone number already in use")]
    PhoneAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Teacher is already assigned to this course")]
    TeacherAlreadyAssigned,

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TeacherNotFound(_) | Self::CourseNotFound(_))
    }

    /// Check if this is a unique-constraint conflict
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UserAlreadyRegistered
                | Self::PhoneAlreadyExists
                | Self::EmailAlreadyExists
                | Self::TeacherAlreadyAssigned
                | Self::DuplicateKey(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::TeacherNotFound(1).is_not_found());
        assert!(DomainError::CourseNotFound(1).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::PhoneAlreadyExists.is_conflict());
        assert!(DomainError::DuplicateKey("teacher_email_key".to_string()).is_conflict());
        assert!(!DomainError::TeacherNotFound(1).is_conflict());
        assert!(!DomainError::DatabaseError("boom".to_string()).is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::TeacherNotFound(123);
        assert_eq!(err.to_string(), "Teacher not found: 123");

        let err = DomainError::DuplicateKey("teacher_phone_key".to_string());
        assert_eq!(err.to_string(), "Duplicate key: teacher_phone_key");
    }
}
