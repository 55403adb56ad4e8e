use axum::extract::State;
use pickyjoy_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TopRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "/top",
    tag = "recipe",
    summary = "Get top rated recipes",
    description = "Up to 20 of the caller's recipes averaging 4 stars or more.",
    responses(
        (status = 200, body = TopRecipesResponse)
    ),
)]
pub async fn get_top_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<TopRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .get_top_recipes(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(TopRecipesResponse { data: recipes }))
}
