use axum::extract::State;
use pickyjoy_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::SaveRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::SaveRecipeValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Save a recipe",
    description = "Extracts the recipe from an assistant message and stores it for the caller.",
    responses(
        (status = 201, body = RecipeResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = SaveRecipeValidator
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SaveRecipeValidator>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .save_recipe(
            identity,
            SaveRecipeInput {
                content: payload.content,
                nutrition_info: payload.nutrition_info,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RecipeResponse { data: recipe }))
}
