use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{extract::Query, extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

/// Stand-in for the directions service.
#[derive(Clone)]
pub struct Upstream {
    status: StatusCode,
    body: Value,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl Upstream {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
            requests: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({"error": "boom"}),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn directions_body(starts: &[(f64, f64)]) -> Value {
    let steps: Vec<Value> = starts
        .iter()
        .map(|(lat, lng)| json!({"start_location": {"lat": lat, "lng": lng}}))
        .collect();
    json!({"status": "OK", "routes": [{"legs": [{"steps": steps}]}]})
}

async fn directions(
    State(upstream): State<Upstream>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    upstream.requests.lock().unwrap().push(params);
    (upstream.status, Json(upstream.body.clone()))
}

/// Binds `router` on an ephemeral loopback port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn spawn_upstream(upstream: Upstream) -> String {
    let router = Router::new()
        .route("/directions/json", get(directions))
        .with_state(upstream);
    serve(router).await
}
