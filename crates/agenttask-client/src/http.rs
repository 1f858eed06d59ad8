//! HTTP transport for the agent task REST endpoints.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::multipart::Form;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// HTTP client for the agent service REST API.
///
/// Holds the base URL plus a `reqwest::Client` preconfigured with bearer
/// authorization, `Accept: application/json` and the request timeout. All
/// status-to-error mapping happens here, once, so the facade never inspects
/// raw status codes.
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from the given config.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| ClientError::Config("API key is not a valid header value".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a JSON response from an endpoint.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET request");

        let response = self.inner.get(&url).send().await?;
        Self::decode(Self::check(response, path).await?).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "POST request");

        let response = self.inner.post(&url).json(body).send().await?;
        Self::decode(Self::check(response, path).await?).await
    }

    /// POST a multipart form and decode the JSON response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "POST multipart request");

        let response = self.inner.post(&url).multipart(form).send().await?;
        Self::decode(Self::check(response, path).await?).await
    }

    /// GET a raw byte stream, for artifact downloads.
    ///
    /// Returns the checked response so the caller can consume the body in
    /// chunks without buffering it whole.
    pub async fn get_stream(&self, path: &str) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET stream request");

        let response = self.inner.get(&url).send().await?;
        Self::check(response, path).await
    }

    /// Map a non-success status to the typed error taxonomy.
    async fn check(response: Response, path: &str) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(path.to_string()),
            StatusCode::CONFLICT => ClientError::InvalidState(if message.is_empty() {
                path.to_string()
            } else {
                message
            }),
            _ => ClientError::Remote {
                status: status.as_u16(),
                message,
            },
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        response
            .json()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }
}
