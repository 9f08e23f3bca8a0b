//! PostgreSQL implementation of TeacherRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use course_core::entities::{Teacher, TeacherFilter};
use course_core::query::PageInfo;
use course_core::traits::{RepoResult, TeacherRepository};

use crate::models::TeacherModel;

use super::error::{map_db_error, map_unique_violation, teacher_not_found};
use super::query::{push_like, push_page, push_status_in};

/// Columns callers may sort the teacher list by
const SORTABLE_COLUMNS: &[&str] = &["id", "user_id", "name", "status", "created_at", "updated_at"];

/// PostgreSQL implementation of TeacherRepository
#[derive(Clone)]
pub struct PgTeacherRepository {
    pool: PgPool,
}

impl PgTeacherRepository {
    /// Create a new PgTeacherRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherRepository for PgTeacherRepository {
    #[instrument(skip(self, teacher), fields(user_id = teacher.user_id))]
    async fn create(&self, teacher: &Teacher) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO teacher (user_id, name, phone, email, bio, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            ",
        )
        .bind(teacher.user_id)
        .bind(&teacher.name)
        .bind(&teacher.phone)
        .bind(&teacher.email)
        .bind(&teacher.bio)
        .bind(teacher.status.as_i16())
        .bind(teacher.created_at)
        .bind(teacher.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> RepoResult<Teacher> {
        let result = sqlx::query_as::<_, TeacherModel>(
            r"
            SELECT id, user_id, name, phone, email, bio, status,
                   created_at, updated_at, deleted_at
            FROM teacher
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Teacher::from).ok_or_else(|| teacher_not_found(id))
    }

    #[instrument(skip(self, teacher), fields(id = teacher.id))]
    async fn update(&self, teacher: &Teacher) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE teacher
            SET user_id = $2, name = $3, phone = $4, email = $5, bio = $6,
                status = $7, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(teacher.id)
        .bind(teacher.user_id)
        .bind(&teacher.name)
        .bind(&teacher.phone)
        .bind(&teacher.email)
        .bind(&teacher.bio)
        .bind(teacher.status.as_i16())
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE teacher
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

    #[instrument(skip(self, page, filters))]
    async fn find(&self, page: &PageInfo, filters: &[TeacherFilter]) -> RepoResult<Vec<Teacher>> {
        let mut qb = QueryBuilder::<Postgres>::new(
            r"SELECT id, user_id, name, phone, email, bio, status,
                     created_at, updated_at, deleted_at
              FROM teacher WHERE deleted_at IS NULL",
        );

        for filter in filters {
            match filter {
                TeacherFilter::NameContains(needle) => push_like(&mut qb, "name", needle),
                TeacherFilter::StatusIn(statuses) => {
                    let values: Vec<i16> = statuses.iter().map(|s| s.as_i16()).collect();
                    push_status_in(&mut qb, &values);
                }
            }
        }

        push_page(&mut qb, page, SORTABLE_COLUMNS);

        let rows = qb
            .build_query_as::<TeacherModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Teacher::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTeacherRepository>();
    }
}
