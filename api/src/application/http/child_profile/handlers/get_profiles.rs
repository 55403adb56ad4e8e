use axum::extract::State;
use pickyjoy_core::domain::child_profile::{entities::ChildProfile, ports::ChildProfileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetChildProfilesResponse {
    pub data: Vec<ChildProfile>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "child_profile",
    summary = "Get child profiles",
    description = "Profiles of the caller, newest first.",
    responses(
        (status = 200, body = GetChildProfilesResponse)
    ),
)]
pub async fn get_profiles(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetChildProfilesResponse>, ApiError> {
    let profiles = state
        .service
        .get_profiles(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetChildProfilesResponse { data: profiles }))
}
