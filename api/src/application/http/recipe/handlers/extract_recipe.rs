use axum::extract::State;
use pickyjoy_core::domain::recipe::{entities::ExtractedRecipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::ExtractRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ExtractRecipeResponse {
    pub data: Option<ExtractedRecipe>,
}

#[utoipa::path(
    post,
    path = "/extract",
    tag = "recipe",
    summary = "Detect a recipe in assistant text",
    description = "Runs the recipe patterns over the given text. Nothing is stored; `data` is null when no recipe is found.",
    responses(
        (status = 200, body = ExtractRecipeResponse)
    ),
    request_body = ExtractRecipeValidator
)]
pub async fn extract_recipe(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ExtractRecipeValidator>,
) -> Result<Response<ExtractRecipeResponse>, ApiError> {
    let data = state.service.extract_recipe(payload.content);

    Ok(Response::OK(ExtractRecipeResponse { data }))
}
