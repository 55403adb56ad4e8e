use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::extract_recipe::{__path_extract_recipe, extract_recipe};
use super::handlers::get_top_recipes::{__path_get_top_recipes, get_top_recipes};
use super::handlers::rate_recipe::{__path_rate_recipe, rate_recipe};
use super::handlers::save_recipe::{__path_save_recipe, save_recipe};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(extract_recipe, save_recipe, get_top_recipes, rate_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/recipes", root_path), post(save_recipe))
        .route(&format!("{}/recipes/extract", root_path), post(extract_recipe))
        .route(&format!("{}/recipes/top", root_path), get(get_top_recipes))
        .route(
            &format!("{}/recipes/{{recipe_id}}/ratings", root_path),
            post(rate_recipe),
        )
}
