//! Schema auto-migration
//!
//! Derives the schema from the entity declarations and applies it with
//! idempotent DDL. Table names are singular. Every table carries the shared
//! base columns: `BIGSERIAL` identifier plus created/updated/soft-delete
//! timestamps.
//!
//! Unique constraints keep their default Postgres names
//! (`<table>_<column>_key`); the repository error mapping relies on them.

use sqlx::PgPool;
use tracing::info;

const CREATE_TEACHER: &str = r"
CREATE TABLE IF NOT EXISTS teacher (
    id BIGSERIAL PRIMARY KEY,
    user_id BIGINT NOT NULL UNIQUE,
    name VARCHAR(100) NOT NULL,
    phone VARCHAR(20) NOT NULL UNIQUE,
    email VARCHAR(100) NOT NULL UNIQUE,
    bio TEXT NOT NULL DEFAULT '',
    status SMALLINT NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    deleted_at TIMESTAMPTZ
)
";

const CREATE_COURSE: &str = r"
CREATE TABLE IF NOT EXISTS course (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    description TEXT NOT NULL,
    price BIGINT NOT NULL DEFAULT 0,
    max_students INTEGER NOT NULL DEFAULT 0,
    min_students INTEGER NOT NULL DEFAULT 0,
    registration_start_date TIMESTAMPTZ NOT NULL,
    registration_end_date TIMESTAMPTZ NOT NULL,
    start_date TIMESTAMPTZ NOT NULL,
    end_date TIMESTAMPTZ NOT NULL,
    is_online BOOLEAN NOT NULL DEFAULT FALSE,
    status SMALLINT NOT NULL DEFAULT 0,
    note TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    deleted_at TIMESTAMPTZ
)
";

const CREATE_COURSE_TEACHER: &str = r"
CREATE TABLE IF NOT EXISTS course_teacher (
    id BIGSERIAL PRIMARY KEY,
    course_id BIGINT NOT NULL,
    teacher_id BIGINT NOT NULL,
    is_main BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    deleted_at TIMESTAMPTZ,
    CONSTRAINT course_teacher_course_id_teacher_id_key UNIQUE (course_id, teacher_id)
)
";

const CREATE_COURSE_PATTERN: &str = r"
CREATE TABLE IF NOT EXISTS course_pattern (
    id BIGSERIAL PRIMARY KEY,
    course_id BIGINT NOT NULL,
    day_of_week SMALLINT NOT NULL,
    start_time TIMESTAMPTZ NOT NULL,
    end_time TIMESTAMPTZ NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    deleted_at TIMESTAMPTZ
)
";

// Soft-delete lookups filter on deleted_at in every query
const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_teacher_deleted_at ON teacher (deleted_at)",
    "CREATE INDEX IF NOT EXISTS idx_course_deleted_at ON course (deleted_at)",
    "CREATE INDEX IF NOT EXISTS idx_course_teacher_deleted_at ON course_teacher (deleted_at)",
    "CREATE INDEX IF NOT EXISTS idx_course_pattern_deleted_at ON course_pattern (deleted_at)",
    "CREATE INDEX IF NOT EXISTS idx_course_pattern_course_id ON course_pattern (course_id)",
];

/// Ensure all entity tables and indexes exist
///
/// Safe to run on every startup; existing objects are left untouched.
pub async fn auto_migrate(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in [
        CREATE_TEACHER,
        CREATE_COURSE,
        CREATE_COURSE_TEACHER,
        CREATE_COURSE_PATTERN,
    ] {
        sqlx::query(ddl).execute(pool).await?;
    }

    for ddl in CREATE_INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    info!("schema migration complete");
    Ok(())
}
