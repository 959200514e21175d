use thiserror::Error;

// Custom Result type alias for convenient use across the project
pub type Result<T> = std::result::Result<T, RouteError>;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Upstream rejected the request ({status}): {message}")]
    Upstream { status: String, message: String },

    #[error("No route in upstream response")]
    NoRoute,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RouteError {
    /// Coarse failure class reported next to an empty route.
    pub fn kind(&self) -> &'static str {
        match self {
            RouteError::NoRoute => "no_route",
            RouteError::Config(_) => "config_error",
            RouteError::Http(_) | RouteError::Decode(_) | RouteError::Upstream { .. } => {
                "upstream_error"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_group_upstream_failures() {
        assert_eq!(RouteError::NoRoute.kind(), "no_route");
        let upstream = RouteError::Upstream {
            status: "REQUEST_DENIED".to_string(),
            message: "bad key".to_string(),
        };
        assert_eq!(upstream.kind(), "upstream_error");

        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(RouteError::from(decode).kind(), "upstream_error");
    }

    #[test]
    fn upstream_message_is_readable() {
        let err = RouteError::Upstream {
            status: "OVER_QUERY_LIMIT".to_string(),
            message: "slow down".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream rejected the request (OVER_QUERY_LIMIT): slow down"
        );
    }
}
