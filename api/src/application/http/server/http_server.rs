use std::{sync::Arc, time::Duration};

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use pickyjoy_core::{application::create_service, domain::common::PickyJoyConfig};
use tower_http::cors::{Any, CorsLayer};
use tracing::info_span;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::chat::router::chat_routes;
use crate::application::http::child_profile::router::child_profile_routes;
use crate::application::http::health::router::health_routes;
use crate::application::http::history::router::history_routes;
use crate::application::http::recipe::router::recipe_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::http::settings::router::settings_routes;
use crate::args::Args;

const CORS_MAX_AGE: Duration = Duration::from_secs(86400);

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = PickyJoyConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(Any)
        .allow_headers(Any)
        .max_age(CORS_MAX_AGE);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let mut router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(chat_routes(state.clone()))
        .merge(history_routes(state.clone()))
        .merge(settings_routes(state.clone()))
        .merge(child_profile_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .merge(health_routes(state.clone()));

    if state.args.server.metrics_enabled {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let router = router.layer(trace_layer).layer(cors).with_state(state);
    Ok(router)
}
