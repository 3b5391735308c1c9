//! Academy gRPC Service
//!
//! Courses, their component trees, enrollments and AI-assisted course search.
//!
//! ## Architecture
//!
//! ```text
//! Client (campus-api-gateway)
//!   ↓ gRPC + Zstd, AllowListInterceptor
//! CoursesServiceImpl (service.rs)
//!   ↓ proto ↔ domain via domain_courses::conversions
//! CourseService ──▶ SearchPipeline ──▶ Vertex AI / chat completions
//!   ↓
//! PgCourseRepository ──▶ QueryExecutor + QueryRegistry
//!   ↓
//! PostgreSQL + pgvector
//! ```
//!
//! An axum listener next to the gRPC server answers `GET /health` and `GET /`.
//!
//! ## Modules
//!
//! - `config`: environment-driven settings
//! - `health`: HTTP health shim
//! - `server`: startup, serving and graceful shutdown
//! - `service`: gRPC service implementation (CoursesServiceImpl)

pub mod config;
pub mod health;
pub mod server;
pub mod service;

pub use config::AppConfig;
pub use server::run;
pub use service::CoursesServiceImpl;
