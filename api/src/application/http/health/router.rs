use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::health::{__path_health, health};
use super::handlers::readiness::{__path_readiness, readiness};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(health, readiness))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/health", root_path), get(health))
        .route(&format!("{}/health/ready", root_path), get(readiness))
}
