use axum::extract::{Path, State};
use pickyjoy_core::domain::child_profile::{
    ports::ChildProfileService, value_objects::UpdateChildProfileInput,
};
use uuid::Uuid;

use super::create_profile::ChildProfileResponse;
use crate::application::auth::RequiredIdentity;
use crate::application::http::child_profile::validators::{ChildProfileValidator, list_items};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/{profile_id}",
    tag = "child_profile",
    summary = "Update child profile",
    params(
        ("profile_id" = Uuid, Path, description = "Child profile ID"),
    ),
    responses(
        (status = 200, body = ChildProfileResponse),
        (status = 404, description = "Profile not found")
    ),
    request_body = ChildProfileValidator
)]
pub async fn update_profile(
    Path(profile_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ChildProfileValidator>,
) -> Result<Response<ChildProfileResponse>, ApiError> {
    let profile = state
        .service
        .update_profile(
            identity,
            UpdateChildProfileInput {
                profile_id,
                name: payload.name,
                age: payload.age,
                preferences: list_items(payload.preferences),
                allergies: list_items(payload.allergies),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChildProfileResponse { data: profile }))
}
