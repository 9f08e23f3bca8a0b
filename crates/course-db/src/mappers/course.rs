//! Course entity <-> model mapper

use course_core::entities::{Course, CourseStatus};

use crate::models::CourseModel;

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            max_students: model.max_students,
            min_students: model.min_students,
            registration_start_date: model.registration_start_date,
            registration_end_date: model.registration_end_date,
            start_date: model.start_date,
            end_date: model.end_date,
            is_online: model.is_online,
            status: CourseStatus::from(model.status),
            note: model.note,
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
        let model = CourseModel {
            id: 3,
            name: "Rust 101".to_string(),
            description: "Introduction to Rust".to_string(),
            price: 1500,
            max_students: 30,
            min_students: 5,
            registration_start_date: now,
            registration_end_date: now,
            start_date: now,
            end_date: now,
            is_online: true,
            status: 2,
            note: String::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let course = Course::from(model);
        assert_eq!(course.id, 3);
        assert_eq!(course.status, CourseStatus::Online);
        assert!(course.is_online);
        assert_eq!(course.price, 1500);
    }
}
