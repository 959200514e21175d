use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::RouteError;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_directions_url")]
    pub directions_url: String,
    /// Provider credential. Never compiled in; the proxy refuses to start without it.
    #[serde(default)]
    pub directions_api_key: Option<String>,
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,
    #[serde(default = "default_selector")]
    pub selector: String,
    #[serde(default = "default_playback_speed")]
    pub playback_speed: f64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_directions_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

fn default_proxy_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_selector() -> String {
    "today".to_string()
}

fn default_playback_speed() -> f64 {
    1.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        // Parse environment variables into the Config struct
        envy::from_env().context("Failed to load config from environment")
    }

    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).context("Failed to load config from variables")
    }

    pub fn api_key(&self) -> crate::Result<&str> {
        self.directions_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| RouteError::Config("DIRECTIONS_API_KEY must be set".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.directions_url, "https://maps.googleapis.com/maps/api");
        assert_eq!(config.selector, "today");
        assert_eq!(config.playback_speed, 1.0);
        assert!(config.directions_api_key.is_none());
        assert!(matches!(config.api_key(), Err(RouteError::Config(_))));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_vars(vars(&[
            ("DIRECTIONS_API_KEY", "secret"),
            ("PLAYBACK_SPEED", "3"),
            ("SELECTOR", "this_week"),
            ("LISTEN_ADDR", "127.0.0.1:8080"),
        ]))
        .unwrap();
        assert_eq!(config.api_key().unwrap(), "secret");
        assert_eq!(config.playback_speed, 3.0);
        assert_eq!(config.selector, "this_week");
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
    }

    #[test]
    fn empty_key_is_rejected() {
        let config = Config::from_vars(vars(&[("DIRECTIONS_API_KEY", "")])).unwrap();
        let err = config.api_key().unwrap_err();
        assert_eq!(err.kind(), "config_error");
        assert_eq!(err.to_string(), "Configuration error: DIRECTIONS_API_KEY must be set");
    }
}
