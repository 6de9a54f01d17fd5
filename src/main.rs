use anyhow::Result;
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = staffd::config::Config::parse();
    run_server(config).await
}

async fn run_server(config: staffd::config::Config) -> Result<()> {
    let service = staffd::service::Service::new(staffd::store::MemoryStore::new());

    let app = staffd::http::build_router(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!(bind = %config.bind, "starting staffd");
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).compact().init();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
