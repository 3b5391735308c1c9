use ai_providers::AiError;
use database::DatabaseError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CourseError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    /// Everything the transaction did was rolled back
    #[error("Transaction failed at statement {index}: {message}")]
    TransactionFailed { index: usize, message: String },

    #[error("Embedding unavailable: {0}")]
    EmbeddingUnavailable(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("No answer: {0}")]
    NoAnswer(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CourseResult<T> = Result<T, CourseError>;

impl CourseError {
    pub fn course_not_found(id: Uuid) -> Self {
        CourseError::NotFound { entity: "Course", id }
    }
}

impl From<DatabaseError> for CourseError {
    fn from(err: DatabaseError) -> Self {
        let message = err.to_string();
        match err {
            DatabaseError::TransactionFailed { index, source } => CourseError::TransactionFailed {
                index,
                message: source.to_string(),
            },
            DatabaseError::UnresolvedDependency { target_index, .. } => {
                CourseError::TransactionFailed {
                    index: target_index,
                    message,
                }
            }
            _ => CourseError::Database(message),
        }
    }
}

impl From<sea_orm::DbErr> for CourseError {
    fn from(err: sea_orm::DbErr) -> Self {
        CourseError::Database(err.to_string())
    }
}

impl From<AiError> for CourseError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::InvalidInput(msg) => CourseError::Validation(msg),
            AiError::ChatUnavailable(msg) => CourseError::SearchFailed(msg),
            AiError::EmbeddingUnavailable(msg) | AiError::Config(msg) => {
                CourseError::EmbeddingUnavailable(msg)
            }
        }
    }
}

impl From<validator::ValidationErrors> for CourseError {
    fn from(err: validator::ValidationErrors) -> Self {
        CourseError::Validation(err.to_string())
    }
}

/// Status mapping at the RPC boundary
impl From<CourseError> for tonic::Status {
    fn from(err: CourseError) -> Self {
        let message = err.to_string();
        match err {
            CourseError::Validation(_) | CourseError::InvalidCursor(_) => {
                tonic::Status::invalid_argument(message)
            }
            CourseError::NotFound { .. } | CourseError::NoAnswer(_) => {
                tonic::Status::not_found(message)
            }
            CourseError::EmbeddingUnavailable(_) | CourseError::SearchFailed(_) => {
                tonic::Status::unavailable(message)
            }
            CourseError::TransactionFailed { .. } | CourseError::Database(_) => {
                tonic::Status::internal(message)
            }
        }
    }
}
