use axum::extract::State;
use pickyjoy_core::domain::user_settings::ports::UserSettingsService;

use super::get_system_prompt::SystemPromptResponse;
use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "",
    tag = "settings",
    summary = "Reset system prompt",
    description = "Deletes the caller's override so the default prompt applies again.",
    responses(
        (status = 200, body = SystemPromptResponse)
    ),
)]
pub async fn reset_system_prompt(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<SystemPromptResponse>, ApiError> {
    let view = state
        .service
        .reset_system_prompt(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SystemPromptResponse { data: view }))
}
