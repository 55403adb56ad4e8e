use axum::{Json, extract::State, http::StatusCode};
use pickyjoy_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Pings the database. Answers 503 when it is unreachable.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = DatabaseHealthStatus)
    ),
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<DatabaseHealthStatus>), ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((code, Json(status)))
}
