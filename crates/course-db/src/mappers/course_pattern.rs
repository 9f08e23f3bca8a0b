//! CoursePattern entity <-> model mapper

use course_core::entities::CoursePattern;

use crate::models::CoursePatternModel;

impl From<CoursePatternModel> for CoursePattern {
    fn from(model: CoursePatternModel) -> Self {
        CoursePattern {
            id: model.id,
            course_id: model.course_id,
            day_of_week: model.day_of_week,
            start_time: model.start_time,
            end_time: model.end_time,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
