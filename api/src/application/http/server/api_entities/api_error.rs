use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pickyjoy_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Server configuration error")]
    Configuration(Vec<String>),

    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Not found".to_string()),
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::MissingToken => {
                ApiError::Unauthorized("Missing authorization token".to_string())
            }
            CoreError::InvalidToken => {
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::Configuration(missing) => ApiError::Configuration(missing),
            CoreError::ExternalServiceError(message) => ApiError::InternalServerError(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Configuration(_) | ApiError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> ApiErrorResponse {
        match self {
            ApiError::Configuration(missing) => ApiErrorResponse {
                error: "Server configuration error".to_string(),
                details: Some(format!("Missing: {}", missing.join(", "))),
            },
            ApiError::InternalServerError(detail) => {
                error!("Request failed: {}", detail);
                ApiErrorResponse {
                    error: "Internal server error".to_string(),
                    details: None,
                }
            }
            other => ApiErrorResponse {
                error: other.to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<String>>();
    messages.sort();
    messages.join(", ")
}

/// JSON body extractor that runs `validator` rules. Every rejection is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(validation_message(&e)))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status() {
        let cases = [
            (CoreError::Invalid("x".to_string()), StatusCode::BAD_REQUEST),
            (CoreError::MissingToken, StatusCode::UNAUTHORIZED),
            (CoreError::InvalidToken, StatusCode::UNAUTHORIZED),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::Configuration(vec!["GEMINI_API_KEY".to_string()]),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::ExternalServiceError("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core, status) in cases {
            assert_eq!(ApiError::from(core).status(), status);
        }
    }

    #[test]
    fn test_internal_detail_is_not_exposed() {
        let body = ApiError::from(CoreError::ExternalServiceError("key=secret".to_string())).body();

        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.details, None);
    }

    #[test]
    fn test_configuration_error_lists_missing_settings() {
        let body = ApiError::Configuration(vec![
            "DATABASE_URL".to_string(),
            "GEMINI_API_KEY".to_string(),
        ])
        .body();

        assert_eq!(body.error, "Server configuration error");
        assert_eq!(
            body.details.as_deref(),
            Some("Missing: DATABASE_URL, GEMINI_API_KEY")
        );
    }
}
