use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use pickyjoy_core::domain::conversation::ports::ConversationService;

use crate::application::auth::RequiredIdentity;
use crate::application::http::history::validators::GetMessagesQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/export",
    tag = "history",
    summary = "Export chat history",
    description = "Filtered history as a plain-text transcript, oldest first.",
    params(GetMessagesQuery),
    responses(
        (status = 200, content_type = "text/plain", body = String)
    ),
)]
pub async fn export_messages(
    Query(query): Query<GetMessagesQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<impl IntoResponse, ApiError> {
    let export = state
        .service
        .export_history(identity, query.into())
        .await
        .map_err(ApiError::from)?;

    let headers = [
        (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.file_name),
        ),
    ];

    Ok((headers, export.content))
}
