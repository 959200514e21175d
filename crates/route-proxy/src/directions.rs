//! Client for the mapping provider's directions endpoint.
//!
//! Only the first route's first leg is used, and each step contributes its
//! start location. A route with N steps therefore yields N waypoints; the
//! final destination point is not appended.

use std::sync::Arc;

use common::{RangeSelector, Result, RouteError, Waypoint};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::ranges;

#[derive(Debug, Clone)]
pub struct DirectionsClient {
    client: reqwest::Client,
    base_url: Arc<String>,
    api_key: Arc<String>,
}

/// The waypoints handed to callers plus a coarse outcome label.
///
/// An empty `waypoints` is the only failure signal the route consumer sees;
/// `status` exists for logs and the `x-route-status` header.
#[derive(Debug, Clone)]
pub struct RouteReply {
    pub status: &'static str,
    pub waypoints: Vec<Waypoint>,
}

impl DirectionsClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Arc::new(base_url.trim_end_matches('/').to_string()),
            api_key: Arc::new(api_key),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves the selector and fetches its route. Never fails: every error
    /// is logged and turned into an empty route.
    pub async fn get_route(&self, selector: RangeSelector) -> RouteReply {
        let (origin, destination) = ranges::resolve(selector);

        match self.fetch_route(origin, destination).await {
            Ok(waypoints) => {
                info!("📍 Route for {}: {} waypoints", selector, waypoints.len());
                RouteReply { status: "ok", waypoints }
            }
            Err(e) => {
                error!("❌ Failed to fetch route for {}: {}", selector, e);
                RouteReply {
                    status: e.kind(),
                    waypoints: Vec::new(),
                }
            }
        }
    }

    /// One request to the directions service, no retry.
    pub async fn fetch_route(&self, origin: Waypoint, destination: Waypoint) -> Result<Vec<Waypoint>> {
        let url = format!("{}/directions/json", self.base_url);
        debug!("Requesting directions {} -> {}", origin, destination);

        let body = self
            .client
            .get(&url)
            .query(&[
                ("origin", origin.to_string()),
                ("destination", destination.to_string()),
                ("key", self.api_key.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_route(&body)
    }
}

/// Flattens a directions response into the start locations of the first
/// leg's steps.
pub fn parse_route(body: &str) -> Result<Vec<Waypoint>> {
    let res: DirectionsResponse = serde_json::from_str(body)?;

    if let Some(status) = res.status.as_deref() {
        if status != "OK" && status != "ZERO_RESULTS" {
            return Err(RouteError::Upstream {
                status: status.to_string(),
                message: res.error_message.unwrap_or_default(),
            });
        }
    }

    let steps = res
        .routes
        .first()
        .and_then(|route| route.legs.first())
        .map(|leg| leg.steps.as_slice())
        .unwrap_or_default();

    if steps.is_empty() {
        return Err(RouteError::NoRoute);
    }

    Ok(steps
        .iter()
        .map(|step| Waypoint::new(step.start_location.lat, step.start_location.lng))
        .collect())
}

#[derive(Deserialize, Debug)]
struct DirectionsResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Deserialize, Debug)]
struct Route {
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Deserialize, Debug)]
struct Leg {
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Deserialize, Debug)]
struct Step {
    start_location: LatLng,
}

#[derive(Deserialize, Debug)]
struct LatLng {
    lat: f64,
    lng: f64,
}
