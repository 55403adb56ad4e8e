use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::send_message::{__path_send_message, send_message};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(send_message))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/chat", state.args.server.root_path),
        post(send_message),
    )
}
