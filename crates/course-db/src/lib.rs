//! # course-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `course-core`. It handles:
//!
//! - Connection pool management
//! - Schema auto-migration
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use course_db::pool::{create_pool, DatabaseConfig};
//! use course_db::repositories::PgTeacherRepository;
//! use course_core::traits::TeacherRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     course_db::auto_migrate(&pool).await?;
//!     let teacher_repo = PgTeacherRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrate::auto_migrate;
pub use pool::{create_pool, create_pool_from_env, ping, DatabaseConfig, PgPool};
pub use repositories::{
    PgCoursePatternRepository, PgCourseRepository, PgCourseTeacherRepository, PgTeacherRepository,
};
