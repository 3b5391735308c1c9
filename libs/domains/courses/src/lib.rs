//! Courses Domain
//!
//! Courses, their component trees and enrollments, plus the AI-assisted
//! course search.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  gRPC service    │  ← apps/academy, proto ↔ domain via `conversions`
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐      ┌──────────────────┐
//! │  CourseService   │─────▶│  SearchPipeline  │ ← embed → rank → hydrate → chat
//! └────────┬─────────┘      └────────┬─────────┘
//!          │                         │
//! ┌────────▼─────────────────────────▼─┐
//! │  CourseRepository (PgCourseRepo)   │  ← named SQL via QueryExecutor
//! └────────┬───────────────────────────┘
//!          │
//! ┌────────▼─────────┐
//! │ cursor/pagination│  ← opaque keyset tokens, page assembly
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use database::postgres::{DependencyPolicy, QueryExecutor};
//! use domain_courses::{CourseService, PgCourseRepository, SearchConfig, queries};
//! use std::sync::Arc;
//!
//! let executor = QueryExecutor::new(db, Arc::new(queries::registry()));
//! let service = CourseService::new(PgCourseRepository::new(executor), SearchConfig::default())
//!     .with_ai(embedder, chat);
//! let course = service.get_course_by_id(course_id).await?;
//! ```

pub mod config;
pub mod conversions;
pub mod cursor;
pub mod error;
pub mod models;
pub mod pagination;
pub mod postgres;
pub mod prompts;
pub mod queries;
pub mod repository;
pub mod search;
pub mod service;
pub mod tree;

pub use config::SearchConfig;
pub use error::{CourseError, CourseResult};
pub use models::{
    Component, ComponentInput, Course, CourseMatch, CreateCourse, Enrollment, UpdateCourse,
};
pub use pagination::{Page, PageInfo, PageRequest};
pub use postgres::PgCourseRepository;
pub use repository::CourseRepository;
pub use search::SearchPipeline;
pub use service::CourseService;
