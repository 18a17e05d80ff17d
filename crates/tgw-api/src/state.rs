//! Application state.

use std::sync::Arc;

use tracing::warn;

use tgw_provider::{ProviderConfig, TranscriptClient, TranscriptError, TranscriptProvider};

use crate::config::ApiConfig;

/// Shared application state.
///
/// Immutable after startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    /// Transcript provider, absent when proxy credentials are not
    /// configured. The server still boots without one; transcript
    /// requests then answer 500 until credentials are provided.
    pub provider: Option<Arc<dyn TranscriptProvider>>,
}

impl AppState {
    /// Create application state from the environment.
    pub fn new(config: ApiConfig) -> Result<Self, TranscriptError> {
        let provider_config = ProviderConfig::from_env();

        let provider = if provider_config.proxy.is_some() {
            let client = TranscriptClient::new(provider_config)?;
            Some(Arc::new(client) as Arc<dyn TranscriptProvider>)
        } else {
            warn!("PROXY_USERNAME / PROXY_PASSWORD not set; transcript requests will return 500");
            None
        };

        Ok(Self { config, provider })
    }

    /// State with an explicit provider, for tests.
    pub fn with_provider(config: ApiConfig, provider: Arc<dyn TranscriptProvider>) -> Self {
        Self {
            config,
            provider: Some(provider),
        }
    }

    /// State with no provider, mirroring a server missing its proxy
    /// credentials.
    pub fn without_provider(config: ApiConfig) -> Self {
        Self {
            config,
            provider: None,
        }
    }
}
