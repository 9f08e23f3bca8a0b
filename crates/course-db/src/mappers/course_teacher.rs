//! CourseTeacher entity <-> model mapper

use course_core::entities::CourseTeacher;

use crate::models::CourseTeacherModel;

impl From<CourseTeacherModel> for CourseTeacher {
    fn from(model: CourseTeacherModel) -> Self {
        CourseTeacher {
            id: model.id,
            course_id: model.course_id,
            teacher_id: model.teacher_id,
            is_main: model.is_main,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
