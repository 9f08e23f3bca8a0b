//! Error handling utilities for repositories

use course_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation to its domain conflict error, falling back to a
/// generic database error for everything else
pub fn map_unique_violation(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return classify_unique_constraint(db_err.constraint().unwrap_or_default());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Pick the conflict variant for a Postgres unique-constraint name.
///
/// Constraint names follow the default `<table>_<column>_key` scheme
/// produced by the auto-migration DDL.
pub fn classify_unique_constraint(constraint: &str) -> DomainError {
    match constraint {
        "teacher_user_id_key" => DomainError::UserAlreadyRegistered,
        "teacher_phone_key" => DomainError::PhoneAlreadyExists,
        "teacher_email_key" => DomainError::EmailAlreadyExists,
        "course_teacher_course_id_teacher_id_key" => DomainError::TeacherAlreadyAssigned,
        other => DomainError::DuplicateKey(other.to_string()),
    }
}

/// Create a "teacher not found" error
pub fn teacher_not_found(id: i64) -> DomainError {
    DomainError::TeacherNotFound(id)
}

/// Create a "course not found" error
pub fn course_not_found(id: i64) -> DomainError {
    DomainError::CourseNotFound(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_teacher_constraints() {
        assert!(matches!(
            classify_unique_constraint("teacher_user_id_key"),
            DomainError::UserAlreadyRegistered
        ));
        assert!(matches!(
            classify_unique_constraint("teacher_phone_key"),
            DomainError::PhoneAlreadyExists
        ));
        assert!(matches!(
            classify_unique_constraint("teacher_email_key"),
            DomainError::EmailAlreadyExists
        ));
    }

    #[test]
    fn test_classify_assignment_constraint() {
        assert!(matches!(
            classify_unique_constraint("course_teacher_course_id_teacher_id_key"),
            DomainError::TeacherAlreadyAssigned
        ));
    }

    #[test]
    fn test_classify_unknown_constraint() {
        let err = classify_unique_constraint("something_else_key");
        assert!(matches!(err, DomainError::DuplicateKey(ref name) if name == "something_else_key"));
        assert!(err.is_conflict());
    }
}
