//! PostgreSQL implementation of CoursePatternRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use course_core::entities::CoursePattern;
use course_core::traits::{CoursePatternRepository, RepoResult};

use crate::models::CoursePatternModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CoursePatternRepository
#[derive(Clone)]
pub struct PgCoursePatternRepository {
    pool: PgPool,
}

impl PgCoursePatternRepository {
    /// Create a new PgCoursePatternRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CoursePatternRepository for PgCoursePatternRepository {
    #[instrument(skip(self, pattern), fields(course_id = pattern.course_id))]
    async fn create(&self, pattern: &CoursePattern) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO course_pattern (course_id, day_of_week, start_time, end_time,
                                        created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(pattern.course_id)
        .bind(pattern.day_of_week)
        .bind(pattern.start_time)
        .bind(pattern.end_time)
        .bind(pattern.created_at)
        .bind(pattern.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_by_course(&self, course_id: i64) -> RepoResult<Vec<CoursePattern>> {
        let rows = sqlx::query_as::<_, CoursePatternModel>(
            r"
            SELECT id, course_id, day_of_week, start_time, end_time,
                   created_at, updated_at, deleted_at
            FROM course_pattern
            WHERE course_id = $1 AND deleted_at IS NULL
            ORDER BY day_of_week, id
            ",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CoursePattern::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE course_pattern
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
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
        assert_send_sync::<PgCoursePatternRepository>();
    }
}
