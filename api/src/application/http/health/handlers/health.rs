use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn health() -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "ok".to_string(),
    })
}
