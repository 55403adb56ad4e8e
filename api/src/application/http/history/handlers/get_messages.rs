use axum::extract::{Query, State};
use pickyjoy_core::domain::conversation::{entities::StoredMessage, ports::ConversationService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::history::validators::GetMessagesQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMessagesResponse {
    pub data: Vec<StoredMessage>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "Get chat history",
    description = "Latest messages of the caller, newest first.",
    params(GetMessagesQuery),
    responses(
        (status = 200, body = GetMessagesResponse)
    ),
)]
pub async fn get_messages(
    Query(query): Query<GetMessagesQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMessagesResponse>, ApiError> {
    let messages = state
        .service
        .get_history(identity, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMessagesResponse { data: messages }))
}
