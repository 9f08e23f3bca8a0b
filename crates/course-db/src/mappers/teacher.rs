//! Teacher entity <-> model mapper

use course_core::entities::{Teacher, TeacherStatus};

use crate::models::TeacherModel;

impl From<TeacherModel> for Teacher {
    fn from(model: TeacherModel) -> Self {
        Teacher {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            phone: model.phone,
            email: model.email,
            bio: model.bio,
            status: TeacherStatus::from(model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_entity() {
        let now = Utc::now();
        let model = TeacherModel {
            id: 7,
            user_id: 42,
            name: "John Doe".to_string(),
            phone: "1234567890".to_string(),
            email: "john.doe@example.com".to_string(),
            bio: "I am a teacher".to_string(),
            status: 1,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let teacher = Teacher::from(model);
        assert_eq!(teacher.id, 7);
        assert_eq!(teacher.user_id, 42);
        assert_eq!(teacher.status, TeacherStatus::Approved);
        assert_eq!(teacher.created_at, now);
    }
}
