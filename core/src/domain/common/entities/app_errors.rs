use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Missing configuration: {}", .0.join(", "))]
    Configuration(Vec<String>),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
