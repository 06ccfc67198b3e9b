//! source::http
//!
//! Data source backed by the analytics backend's JSON API.
//!
//! # Endpoints
//!
//! All paths hang off `{base_url}{base_path}` (base path defaults to `/api`):
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list repositories | GET | `/repositories` |
//! | create repository | POST | `/repositories` with `{"name": ...}` |
//! | list commits | GET | `/repositories/{id}/commits` |
//!
//! No authentication, query parameters or pagination are sent.
//!
//! # Errors
//!
//! - Connection failures map to `TransportError::Network`
//! - Non-2xx responses map to `TransportError::Status`, with the message
//!   taken from a `{"message": ...}` body when the backend sends one
//! - Unparseable 2xx bodies map to `TransportError::Decode`
//!
//! Nothing is retried.
//!
//! # Example
//!
//! ```ignore
//! use churnscope::source::http::HttpSource;
//! use churnscope::source::DataSource;
//!
//! let source = HttpSource::new("http://localhost:8080".parse()?, "/api");
//! let repos = source.list_repositories().await?;
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::traits::{Commit, DataSource, NewRepository, Repository, TransportError};

/// Default path prefix of the backend API.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = concat!("churnscope/", env!("CARGO_PKG_VERSION"));

/// HTTP data source.
#[derive(Debug, Clone)]
pub struct HttpSource {
    /// HTTP client for making requests
    client: Client,
    /// Scheme, host and port of the backend
    base_url: Url,
    /// Path prefix of every endpoint (e.g. `/api`)
    base_path: String,
}

impl HttpSource {
    /// Create a source talking to `base_url`, with endpoints under `base_path`.
    pub fn new(base_url: Url, base_path: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            base_path: base_path.into(),
        }
    }

    /// Get the backend URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the endpoint path prefix.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Common headers for API requests.
    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers
    }

    /// Build the URL for an endpoint below the base path.
    ///
    /// Each segment is percent-encoded on its own, so an id containing `/`
    /// stays a single segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                TransportError::Network(format!("'{}' cannot be used as a base URL", self.base_url))
            })?;
            path.pop_if_empty();
            path.extend(self.base_path.split('/').filter(|s| !s.is_empty()));
            path.extend(segments);
        }
        Ok(url)
    }

    /// Send a prepared request, mapping connection failures.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, TransportError> {
        request
            .headers(Self::headers())
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))
        } else {
            Err(Self::error_from_response(response, status).await)
        }
    }

    /// Build a `Status` error from a non-success response.
    async fn error_from_response(response: Response, status: StatusCode) -> TransportError {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        TransportError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn list_repositories(&self) -> Result<Vec<Repository>, TransportError> {
        let url = self.endpoint(&["repositories"])?;
        tracing::debug!(%url, "GET repositories");

        let response = self.send(self.client.get(url)).await?;
        Self::handle_response(response).await
    }

    async fn create_repository(&self, name: &str) -> Result<Repository, TransportError> {
        let url = self.endpoint(&["repositories"])?;
        tracing::debug!(%url, repository_name = name, "POST repository");

        let body = NewRepository {
            name: name.to_string(),
        };
        let response = self.send(self.client.post(url).json(&body)).await?;
        Self::handle_response(response).await
    }

    async fn list_commits(&self, repository_id: &str) -> Result<Vec<Commit>, TransportError> {
        let url = self.endpoint(&["repositories", repository_id, "commits"])?;
        tracing::debug!(%url, repository_id, "GET commits");

        let response = self.send(self.client.get(url)).await?;
        Self::handle_response(response).await
    }
}

/// Error body some backends return alongside a failure status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
