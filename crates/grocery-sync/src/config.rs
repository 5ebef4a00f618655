//! Remote store configuration, read from compile-time environment.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Base URL of the grocery API, e.g. `http://localhost:5000/api`
    pub api_base_url: String,
    /// Per-request timeout (native targets only)
    pub request_timeout_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SyncConfig {
    /// Load settings from environment variables baked in at build time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("GROCERY_API_URL"), option_env!("GROCERY_API_TIMEOUT_SECS"))
    }

    fn from_values(url: Option<&str>, timeout: Option<&str>) -> Self {
        Self {
            api_base_url: url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            request_timeout_secs: timeout
                .and_then(|t| t.trim().parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SyncConfig::from_values(None, None);
        assert_eq!(config, SyncConfig::default());
    }

    #[test]
    fn test_overrides_and_bad_timeout() {
        let config = SyncConfig::from_values(Some("https://shop.example/api/"), Some("abc"));
        assert_eq!(config.api_base_url, "https://shop.example/api/");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);

        let config = SyncConfig::from_values(Some("  "), Some(" 5 "));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_endpoint_join() {
        let config = SyncConfig::from_values(Some("https://shop.example/api/"), None);
        assert_eq!(config.endpoint("/items/3/cart"), "https://shop.example/api/items/3/cart");
        assert_eq!(config.endpoint("history"), "https://shop.example/api/history");
    }
}
