//! Provider configuration.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://www.youtube.com";
const DEFAULT_PROXY_URL: &str = "http://p.webshare.io:80/";

/// Credentials for the rotating residential proxy.
///
/// Loaded once at startup and injected into the client constructor;
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct ProxyCredentials {
    /// Proxy account username
    pub username: String,
    /// Proxy account password
    pub password: String,
    /// Proxy gateway URL
    pub url: String,
}

impl ProxyCredentials {
    /// Read credentials from `PROXY_USERNAME` / `PROXY_PASSWORD`.
    ///
    /// Returns `None` unless both are set and non-empty.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("PROXY_USERNAME").ok()?;
        let password = std::env::var("PROXY_PASSWORD").ok()?;

        if username.is_empty() || password.is_empty() {
            return None;
        }

        Some(Self {
            username,
            password,
            url: std::env::var("WEBSHARE_PROXY_URL")
                .unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string()),
        })
    }
}

/// Configuration for the transcript client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the upstream video platform
    pub base_url: String,
    /// Caption languages to try, in preference order
    pub languages: Vec<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Proxy credentials; all upstream traffic is routed through the
    /// proxy when present
    pub proxy: Option<ProxyCredentials>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            languages: vec!["en".to_string()],
            timeout: Duration::from_secs(30),
            proxy: None,
        }
    }
}

impl ProviderConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("YOUTUBE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            languages: std::env::var("TRANSCRIPT_LANGUAGES")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["en".to_string()]),
            timeout: Duration::from_secs(
                std::env::var("TRANSCRIPT_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            proxy: ProxyCredentials::from_env(),
        }
    }
}
