use axum::extract::{Path, State};
use pickyjoy_core::domain::child_profile::{
    ports::ChildProfileService, value_objects::DeleteChildProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteChildProfileResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{profile_id}",
    tag = "child_profile",
    summary = "Delete child profile",
    params(
        ("profile_id" = Uuid, Path, description = "Child profile ID"),
    ),
    responses(
        (status = 200, body = DeleteChildProfileResponse),
        (status = 404, description = "Profile not found")
    ),
)]
pub async fn delete_profile(
    Path(profile_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteChildProfileResponse>, ApiError> {
    state
        .service
        .delete_profile(identity, DeleteChildProfileInput { profile_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteChildProfileResponse {
        message: "Profile deleted".to_string(),
    }))
}
