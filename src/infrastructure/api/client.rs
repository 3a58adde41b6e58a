//! Thin JSON client for the portfolio API.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;

/// Sends JSON requests to resource paths below a fixed base URL.
///
/// Each call performs exactly one request: no retry, no timeout. Failures are
/// logged with the attempted resource path and returned to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url` (e.g. `https://api.example.com/api`).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!("portfolio-render/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a resource path.
    pub fn url_for(&self, resource_path: &str) -> String {
        format!("{}{}", self.base_url, resource_path)
    }

    /// Performs `GET {base_url}{resource_path}` and parses the JSON body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Network`] if the request cannot be completed
    /// - [`ClientError::Status`] on a non-2xx response
    /// - [`ClientError::Decode`] if the body is not JSON
    pub async fn get(&self, resource_path: &str) -> Result<Value, ClientError> {
        let request = self
            .http
            .get(self.url_for(resource_path))
            .header(CONTENT_TYPE, "application/json");

        self.execute(resource_path, request)
            .await
            .inspect_err(|e| tracing::error!(path = resource_path, error = %e, "Error fetching resource"))
    }

    /// Performs `POST {base_url}{resource_path}` with `payload` as the JSON body.
    ///
    /// The content type comes from `RequestBuilder::json`; it is not set twice.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub async fn post<P>(&self, resource_path: &str, payload: &P) -> Result<Value, ClientError>
    where
        P: Serialize + Sync + ?Sized,
    {
        let request = self.http.post(self.url_for(resource_path)).json(payload);

        self.execute(resource_path, request)
            .await
            .inspect_err(|e| tracing::error!(path = resource_path, error = %e, "Error posting to resource"))
    }

    async fn execute(&self, resource_path: &str, request: RequestBuilder) -> Result<Value, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Network {
                path: resource_path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                path: resource_path.to_string(),
                status,
            });
        }

        response.json::<Value>().await.map_err(|e| ClientError::Decode {
            path: resource_path.to_string(),
            reason: e.to_string(),
        })
    }
}
