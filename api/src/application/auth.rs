use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use pickyjoy_core::domain::authentication::{ports::AuthService, value_objects::Identity};
use thiserror::Error;
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token not found")]
    TokenNotFound,
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Unauthorized(error.to_string())
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}

/// Identity of the caller, resolved from the bearer token by the session
/// verifier. Rejects with 401 before any handler work happens.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let token = extract_token_from_bearer(parts).await?;

        let app_state = AppState::from_ref(state);
        let identity = app_state
            .service
            .authenticate(token)
            .await
            .map_err(|e| {
                debug!("Authentication failed: {}", e);
                ApiError::from(e)
            })?;

        parts.extensions.insert(identity.clone());

        Ok(RequiredIdentity(identity))
    }
}
