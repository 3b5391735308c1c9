//! PostgreSQL connection management, health probes, the query registry and the executor

mod config;
mod connector;
mod executor;
mod health;
mod registry;

pub use config::PostgresConfig;
pub use connector::{connect_from_config, connect_from_config_with_retry, run_migrations};
pub use executor::{
    Dependency, DependencyPolicy, QueryExecutor, ResultSet, TxStatement, apply_dependency,
    first_scalar, validate_dependencies,
};
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use registry::{QueryRegistry, QueryRegistryBuilder};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr, QueryResult, Value};
pub use sea_orm_migration::MigratorTrait;
