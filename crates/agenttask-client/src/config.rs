//! Client configuration.

use crate::error::ClientError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport configuration for the agent task client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the agent service, e.g. `http://localhost:8000`.
    pub base_url: String,

    /// API key sent as a bearer token on every request.
    pub api_key: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config with the default timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load the config from the environment.
    ///
    /// Reads `AGENTTASK_BASE_URL` and `AGENTTASK_API_KEY` (both required) and
    /// `AGENTTASK_TIMEOUT_SECS` (optional).
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var("AGENTTASK_BASE_URL")
            .map_err(|_| ClientError::Config("AGENTTASK_BASE_URL is not set".to_string()))?;
        let api_key = std::env::var("AGENTTASK_API_KEY")
            .map_err(|_| ClientError::Config("AGENTTASK_API_KEY is not set".to_string()))?;

        let timeout_secs = match std::env::var("AGENTTASK_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ClientError::Config(format!("AGENTTASK_TIMEOUT_SECS is not a number: {raw}"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_key,
            timeout_secs,
        })
    }
}
