mod error;
mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;
use log::info;
use tower_http::cors::CorsLayer;

fn app() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/process-gesture", post(handlers::process_gesture))
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();

    let port: u16 = std::env::var("GESTURE_API_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app()).await?;

    Ok(())
}
