use std::future::Future;

use anyhow::{Context, Result};
use route_common::{RangeSelector, Waypoint};

/// Where the viewer gets its routes from.
pub trait RouteSource: Send + Sync + 'static {
    fn fetch(&self, selector: RangeSelector) -> impl Future<Output = Result<Vec<Waypoint>>> + Send;
}

/// Calls the route proxy's `/vehicle-location` endpoint.
#[derive(Debug, Clone)]
pub struct HttpRouteSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRouteSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl RouteSource for HttpRouteSource {
    async fn fetch(&self, selector: RangeSelector) -> Result<Vec<Waypoint>> {
        let url = format!("{}/vehicle-location", self.base_url);
        self.client
            .get(&url)
            .query(&[("date", selector.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to reach route proxy at {}", url))?
            .error_for_status()?
            .json::<Vec<Waypoint>>()
            .await
            .context("Route proxy returned an unexpected body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::{extract::Query, routing::get, Json, Router};
    use serde_json::{json, Value};

    async fn spawn_proxy() -> String {
        async fn locations(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
            match params.get("date").map(String::as_str) {
                Some("yesterday") => Json(json!([
                    {"latitude": 17.1, "longitude": 78.1},
                    {"latitude": 17.2, "longitude": 78.2}
                ])),
                Some("this_week") => Json(json!({"unexpected": true})),
                _ => Json(json!([])),
            }
        }

        let router = Router::new().route("/vehicle-location", get(locations));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn decodes_the_proxy_array() {
        let source = HttpRouteSource::new(&spawn_proxy().await);

        let path = source.fetch(RangeSelector::Yesterday).await.unwrap();
        assert_eq!(path, vec![Waypoint::new(17.1, 78.1), Waypoint::new(17.2, 78.2)]);

        assert!(source.fetch(RangeSelector::Today).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unexpected_bodies_are_errors() {
        let source = HttpRouteSource::new(&spawn_proxy().await);
        assert!(source.fetch(RangeSelector::ThisWeek).await.is_err());
    }

    #[tokio::test]
    async fn unreachable_proxy_is_an_error() {
        let source = HttpRouteSource::new("http://127.0.0.1:9");
        assert!(source.fetch(RangeSelector::Today).await.is_err());
    }
}
