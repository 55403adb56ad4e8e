use axum::{
    Router,
    routing::{delete, get, put},
};
use utoipa::OpenApi;

use super::handlers::get_system_prompt::{__path_get_system_prompt, get_system_prompt};
use super::handlers::reset_system_prompt::{__path_reset_system_prompt, reset_system_prompt};
use super::handlers::update_system_prompt::{__path_update_system_prompt, update_system_prompt};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_system_prompt, update_system_prompt, reset_system_prompt))]
pub struct SettingsApiDoc;

pub fn settings_routes(state: AppState) -> Router<AppState> {
    let path = format!("{}/settings/system-prompt", state.args.server.root_path);

    Router::new()
        .route(&path, get(get_system_prompt))
        .route(&path, put(update_system_prompt))
        .route(&path, delete(reset_system_prompt))
}
