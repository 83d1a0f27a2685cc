pub mod shared;

use axum::routing::get;
use axum::{middleware, Router};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Health check plus the built docs site. Unknown paths fall back to
/// index.html so client-side pages load on refresh.
fn build_router(dist: PathBuf) -> Router {
    let index = dist.join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(shared::request_log::request_logger))
}

fn init_tracing() -> anyhow::Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = shared::config::load_config()?;
    let dist = shared::config::get_dist_path(&config);
    if !dist.join("index.html").exists() {
        tracing::warn!("index.html not found in {}, build the frontend first", dist.display());
    }
    tracing::info!("Serving site from {}", dist.display());

    let app = build_router(dist);
    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", addr.port());
            } else {
                tracing::error!("Failed to bind to {}: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
