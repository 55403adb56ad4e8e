use axum::extract::State;
use pickyjoy_core::domain::conversation::{
    ports::ConversationService,
    value_objects::{SendMessageInput, SendMessageOutput},
};

use crate::application::auth::RequiredIdentity;
use crate::application::http::chat::validators::SendMessageValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Send a chat message",
    description = "Builds the prompt from the caller's settings, selected child profile and recent history, asks the assistant and stores both turns.",
    responses(
        (status = 200, body = SendMessageOutput),
        (status = 400, body = ApiErrorResponse),
        (status = 401, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = SendMessageValidator
)]
pub async fn send_message(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SendMessageValidator>,
) -> Result<Response<SendMessageOutput>, ApiError> {
    let selected_profile_id = payload.profile_id();

    let output = state
        .service
        .send_message(
            identity,
            SendMessageInput {
                message: payload.message,
                selected_profile_id,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(output))
}
