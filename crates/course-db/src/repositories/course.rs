//! PostgreSQL implementation of CourseRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use course_core::entities::{Course, CourseFilter};
use course_core::query::PageInfo;
use course_core::traits::{CourseRepository, RepoResult};

use crate::models::CourseModel;

use super::error::{course_not_found, map_db_error, map_unique_violation};
use super::query::{push_like, push_page, push_status_in};

/// Columns callers may sort the course list by
const SORTABLE_COLUMNS: &[&str] = &[
    "id",
    "name",
    "price",
    "status",
    "registration_start_date",
    "start_date",
    "created_at",
    "updated_at",
];

const SELECT_COLUMNS: &str = r"id, name, description, price, max_students, min_students,
       registration_start_date, registration_end_date, start_date, end_date,
       is_online, status, note, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of CourseRepository
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    /// Create a new PgCourseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    #[instrument(skip(self, course), fields(name = %course.name))]
    async fn create(&self, course: &Course) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO course (name, description, price, max_students, min_students,
                                registration_start_date, registration_end_date,
                                start_date, end_date, is_online, status, note,
                                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id
            ",
        )
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.price)
        .bind(course.max_students)
        .bind(course.min_students)
        .bind(course.registration_start_date)
        .bind(course.registration_end_date)
        .bind(course.start_date)
        .bind(course.end_date)
        .bind(course.is_online)
        .bind(course.status.as_i16())
        .bind(&course.note)
        .bind(course.created_at)
        .bind(course.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> RepoResult<Course> {
        let result = sqlx::query_as::<_, CourseModel>(&format!(
            "SELECT {SELECT_COLUMNS} FROM course WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Course::from).ok_or_else(|| course_not_found(id))
    }

    #[instrument(skip(self, course), fields(id = course.id))]
    async fn update(&self, course: &Course) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE course
            SET name = $2, description = $3, price = $4, max_students = $5,
                min_students = $6, registration_start_date = $7,
                registration_end_date = $8, start_date = $9, end_date = $10,
                is_online = $11, status = $12, note = $13, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(course.id)
        .bind(&course.name)
        .bind(&course.description)
        .bind(course.price)
        .bind(course.max_students)
        .bind(course.min_students)
        .bind(course.registration_start_date)
        .bind(course.registration_end_date)
        .bind(course.start_date)
        .bind(course.end_date)
        .bind(course.is_online)
        .bind(course.status.as_i16())
        .bind(&course.note)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE course
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
    async fn find(&self, page: &PageInfo, filters: &[CourseFilter]) -> RepoResult<Vec<Course>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {SELECT_COLUMNS} FROM course WHERE deleted_at IS NULL"
        ));

        for filter in filters {
            match filter {
                CourseFilter::NameContains(needle) => push_like(&mut qb, "name", needle),
                CourseFilter::StatusIn(statuses) => {
                    let values: Vec<i16> = statuses.iter().map(|s| s.as_i16()).collect();
                    push_status_in(&mut qb, &values);
                }
                CourseFilter::Online(is_online) => {
                    qb.push(" AND is_online = ");
                    qb.push_bind(*is_online);
                }
            }
        }

        push_page(&mut qb, page, SORTABLE_COLUMNS);

        let rows = qb
            .build_query_as::<CourseModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Course::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCourseRepository>();
    }
}
