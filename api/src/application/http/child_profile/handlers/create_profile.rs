use axum::extract::State;
use pickyjoy_core::domain::child_profile::{
    entities::ChildProfile, ports::ChildProfileService, value_objects::CreateChildProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::child_profile::validators::{ChildProfileValidator, list_items};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChildProfileResponse {
    pub data: ChildProfile,
}

#[utoipa::path(
    post,
    path = "",
    tag = "child_profile",
    summary = "Create child profile",
    responses(
        (status = 201, body = ChildProfileResponse)
    ),
    request_body = ChildProfileValidator
)]
pub async fn create_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ChildProfileValidator>,
) -> Result<Response<ChildProfileResponse>, ApiError> {
    let profile = state
        .service
        .create_profile(
            identity,
            CreateChildProfileInput {
                name: payload.name,
                age: payload.age,
                preferences: list_items(payload.preferences),
                allergies: list_items(payload.allergies),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ChildProfileResponse { data: profile }))
}
