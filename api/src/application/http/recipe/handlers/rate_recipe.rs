use axum::extract::{Path, State};
use pickyjoy_core::domain::recipe::{ports::RecipeService, value_objects::RateRecipeInput};
use uuid::Uuid;

use super::save_recipe::RecipeResponse;
use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::RateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/{recipe_id}/ratings",
    tag = "recipe",
    summary = "Rate a recipe",
    description = "Stores a 1 to 5 rating and returns the recipe with its refreshed average.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = RecipeResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse)
    ),
    request_body = RateRecipeValidator
)]
pub async fn rate_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RateRecipeValidator>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .rate_recipe(
            identity,
            RateRecipeInput {
                recipe_id,
                rating: payload.rating,
                comment: payload.comment,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse { data: recipe }))
}
