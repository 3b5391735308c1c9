/// Error type for connection management, queries and transactions.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Error from a single statement outside a transaction
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// A statement inside a transaction failed; the whole transaction was rolled back
    #[cfg(feature = "postgres")]
    #[error("Transaction failed at statement {index}: {source}")]
    TransactionFailed {
        index: usize,
        #[source]
        source: sea_orm::DbErr,
    },

    /// A dependency does not describe a reachable parameter slot
    #[error("Invalid dependency: {0}")]
    InvalidDependency(String),

    /// The source statement of a dependency produced no scalar value
    #[error(
        "Statement {source_index} produced no value for parameter {target_param_index} of statement {target_index}"
    )]
    UnresolvedDependency {
        source_index: usize,
        target_index: usize,
        target_param_index: usize,
    },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

impl DatabaseError {
    /// Index of the failing statement, when the error came from a transaction
    pub fn statement_index(&self) -> Option<usize> {
        match self {
            #[cfg(feature = "postgres")]
            DatabaseError::TransactionFailed { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
