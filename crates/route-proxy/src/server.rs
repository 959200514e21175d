use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use common::RangeSelector;
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::directions::DirectionsClient;

const ROUTE_STATUS: &str = "x-route-status";

struct AppState {
    directions: DirectionsClient,
}

/// Builds the proxy's HTTP surface around a directions client.
pub fn router(directions: DirectionsClient) -> Router {
    let state = Arc::new(AppState { directions });

    Router::new()
        .route("/health", get(health_check))
        .route("/vehicle-location", get(vehicle_location))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

// --- HANDLERS ---

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    directions_url: String,
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        directions_url: state.directions.base_url().to_string(),
    })
}

/// First non-empty `date` value, or `today`. Repeated keys and unknown
/// parameters never reject the request.
fn selector_from_params(params: &[(String, String)]) -> RangeSelector {
    params
        .iter()
        .find(|(key, value)| key == "date" && !value.is_empty())
        .map(|(_, value)| RangeSelector::from(value.as_str()))
        .unwrap_or_default()
}

/// Always answers 200 with a JSON array; `[]` stands for every failure.
async fn vehicle_location(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let selector = selector_from_params(&params);

    let reply = state.directions.get_route(selector).await;
    ([(ROUTE_STATUS, reply.status)], Json(reply.waypoints))
}
