use axum::extract::State;
use pickyjoy_core::domain::user_settings::ports::UserSettingsService;

use super::get_system_prompt::SystemPromptResponse;
use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::settings::validators::UpdateSystemPromptValidator;

#[utoipa::path(
    put,
    path = "",
    tag = "settings",
    summary = "Update system prompt",
    description = "Stores a prompt override for the caller, replacing any previous one.",
    responses(
        (status = 200, body = SystemPromptResponse)
    ),
    request_body = UpdateSystemPromptValidator
)]
pub async fn update_system_prompt(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateSystemPromptValidator>,
) -> Result<Response<SystemPromptResponse>, ApiError> {
    let view = state
        .service
        .update_system_prompt(identity, payload.system_prompt)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SystemPromptResponse { data: view }))
}
