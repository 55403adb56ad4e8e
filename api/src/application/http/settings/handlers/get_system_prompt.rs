use axum::extract::State;
use pickyjoy_core::domain::user_settings::{entities::SystemPromptView, ports::UserSettingsService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SystemPromptResponse {
    pub data: SystemPromptView,
}

#[utoipa::path(
    get,
    path = "",
    tag = "settings",
    summary = "Get system prompt",
    description = "The caller's prompt override, or the default prompt when none is stored.",
    responses(
        (status = 200, body = SystemPromptResponse)
    ),
)]
pub async fn get_system_prompt(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<SystemPromptResponse>, ApiError> {
    let view = state
        .service
        .get_system_prompt(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SystemPromptResponse { data: view }))
}
