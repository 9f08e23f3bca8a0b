//! PostgreSQL implementation of CourseTeacherRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use course_core::entities::CourseTeacher;
use course_core::traits::{CourseTeacherRepository, RepoResult};

use crate::models::CourseTeacherModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CourseTeacherRepository
#[derive(Clone)]
pub struct PgCourseTeacherRepository {
    pool: PgPool,
}

impl PgCourseTeacherRepository {
    /// Create a new PgCourseTeacherRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseTeacherRepository for PgCourseTeacherRepository {
    #[instrument(skip(self, assignment), fields(course_id = assignment.course_id, teacher_id = assignment.teacher_id))]
    async fn create(&self, assignment: &CourseTeacher) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO course_teacher (course_id, teacher_id, is_main, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(assignment.course_id)
        .bind(assignment.teacher_id)
        .bind(assignment.is_main)
        .bind(assignment.created_at)
        .bind(assignment.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_by_course(&self, course_id: i64) -> RepoResult<Vec<CourseTeacher>> {
        let rows = sqlx::query_as::<_, CourseTeacherModel>(
            r"
            SELECT id, course_id, teacher_id, is_main, created_at, updated_at, deleted_at
            FROM course_teacher
            WHERE course_id = $1 AND deleted_at IS NULL
            ORDER BY is_main DESC, id
            ",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CourseTeacher::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, course_id: i64, teacher_id: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE course_teacher
            SET deleted_at = NOW()
            WHERE course_id = $1 AND teacher_id = $2 AND deleted_at IS NULL
            ",
        )
        .bind(course_id)
        .bind(teacher_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCourseTeacherRepository>();
    }
}
