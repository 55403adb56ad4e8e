use std::sync::Arc;

use clap::Parser;
use pickyjoy_api::application::http::server::http_server::{router, state};
use pickyjoy_api::args::{Args, LogArgs, LogFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    match log.format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let app_state = state(args.clone()).await?;
    let app = router(app_state)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
