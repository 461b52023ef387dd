use super::AppState;
use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    /// City to get the weather for
    pub city: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherResponse {
    pub result: String,
}

/// Current weather for `?city=`; lookup failures are reported in `result` with 200
pub async fn weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Json<WeatherResponse> {
    info!("GET /weather city={}", query.city);
    let result = state.weather.get_weather(&query.city).await;
    Json(WeatherResponse { result })
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
