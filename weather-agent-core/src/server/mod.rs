//! HTTP endpoint exposing the weather lookup directly, without the model

pub mod handlers;

use crate::weather::WeatherLookup;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<dyn WeatherLookup>,
}

/// Build the router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(handlers::weather))
        .route("/health", get(handlers::health_check))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

/// Weather API server
pub struct WeatherServer {
    addr: SocketAddr,
    state: AppState,
}

impl WeatherServer {
    pub fn new(addr: SocketAddr, weather: Arc<dyn WeatherLookup>) -> Self {
        Self { addr, state: AppState { weather } }
    }

    /// Run the server (blocks until the listener fails)
    pub async fn run(self) -> anyhow::Result<()> {
        let router = build_router(self.state);
        let listener = tokio::net::TcpListener::bind(self.addr).await?;

        info!("Weather API listening on http://{}", listener.local_addr()?);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
