use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::export_messages::{__path_export_messages, export_messages};
use super::handlers::get_messages::{__path_get_messages, get_messages};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_messages, export_messages))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/messages", state.args.server.root_path),
            get(get_messages),
        )
        .route(
            &format!("{}/messages/export", state.args.server.root_path),
            get(export_messages),
        )
}
