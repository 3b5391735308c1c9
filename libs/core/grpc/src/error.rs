use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors raised while configuring or starting a gRPC server
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Host/port pair does not form a socket address
  #[error("Invalid listen address '{address}': {details}")]
  InvalidAddress { address: String, details: String },

  /// Invalid configuration
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  #[error(transparent)]
  Config(#[from] core_config::ConfigError),
}

impl From<GrpcError> for tonic::Status {
  fn from(err: GrpcError) -> Self {
    tonic::Status::failed_precondition(err.to_string())
  }
}

/// Extension trait for Result types to convert errors to tonic::Status
///
/// # Example
/// ```ignore
/// use grpc_client::error::ToTonicResult;
/// use grpc_client::conversions::parse_uuid;
///
/// let course_id = parse_uuid("course_id", &request.course_id).to_tonic()?;
/// ```
pub trait ToTonicResult<T> {
  /// Convert the error in this Result to a tonic::Status with INVALID_ARGUMENT code
  fn to_tonic(self) -> Result<T, tonic::Status>;

  /// Convert the error to a tonic::Status with a custom code
  fn to_tonic_with_code(self, code: tonic::Code) -> Result<T, tonic::Status>;
}

impl<T> ToTonicResult<T> for Result<T, String> {
  fn to_tonic(self) -> Result<T, tonic::Status> {
    self.map_err(tonic::Status::invalid_argument)
  }

  fn to_tonic_with_code(self, code: tonic::Code) -> Result<T, tonic::Status> {
    self.map_err(|e| tonic::Status::new(code, e))
  }
}

/// Extension trait for Option types to convert None to tonic::Status errors
///
/// # Example
/// ```ignore
/// use grpc_client::error::ToTonicOption;
///
/// let last = request.messages.last().ok_or_invalid("messages must not be empty")?;
/// ```
pub trait ToTonicOption<T> {
  /// Convert None to a tonic::Status with NOT_FOUND code
  fn ok_or_not_found(self, message: impl Into<String>) -> Result<T, tonic::Status>;

  /// Convert None to a tonic::Status with INVALID_ARGUMENT code
  fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status>;
}

impl<T> ToTonicOption<T> for Option<T> {
  fn ok_or_not_found(self, message: impl Into<String>) -> Result<T, tonic::Status> {
    self.ok_or_else(|| tonic::Status::not_found(message.into()))
  }

  fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status> {
    self.ok_or_else(|| tonic::Status::invalid_argument(message.into()))
  }
}
