//! PostgreSQL access layer for the academy services.
//!
//! Connection management, health probes and retry helpers, plus the two
//! pieces every repository goes through:
//!
//! - [`postgres::QueryRegistry`]: named SQL, addressable as `name` or
//!   `category.name`.
//! - [`postgres::QueryExecutor`]: single statements and ordered, atomic
//!   multi-statement transactions where one statement's first scalar can feed
//!   a later statement's parameter.
//!
//! # Features
//!
//! - `postgres` (default) - SeaORM connection, executor and registry
//! - `config` (default) - `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! ```ignore
//! use database::postgres::{self, QueryExecutor, QueryRegistry};
//!
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! let registry = QueryRegistry::builder()
//!     .namespace("courses", [("get_course_by_id", "SELECT ... WHERE course_id = $1")])
//!     .build();
//! let executor = QueryExecutor::new(db, registry.into());
//! let rows = executor.query("courses.get_course_by_id", [id.into()]).await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
