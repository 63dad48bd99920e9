//! HTTP client for the backend API
//!
//! Reads are lenient about availability and strict about shape: any
//! non-success answer (or an unreachable backend) is reported as `None`,
//! while a success answer must validate or the call fails.

use common::dto::{self, Validate};
use reqwest::Url;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::error::{FrontendError, FrontendResult};

/// Backend API client
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Create a new client for the backend rooted at `base_url`
    pub fn new(base_url: &str) -> FrontendResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            FrontendError::Configuration(format!("Invalid backend URL {base_url}: {e}"))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(FrontendError::Configuration(format!(
                "Backend URL {base_url} cannot be used as a base"
            )));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Build the URL of a backend resource, percent-encoding each segment
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetch and validate a resource, `None` when the backend does not serve it
    pub async fn get_optional<T>(&self, segments: &[&str]) -> FrontendResult<Option<T>>
    where
        T: DeserializeOwned + Validate,
    {
        let url = self.endpoint(segments);

        let response = match self.http.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, "Could not reach backend: {}", e);
                return Ok(None);
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(%url, %status, "Backend did not return the resource");
            return Ok(None);
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                warn!(%url, "Could not read backend response: {}", e);
                return Ok(None);
            }
        };

        dto::parse_json(&body)
            .map(Some)
            .map_err(|source| FrontendError::ShapeViolation {
                url: url.to_string(),
                source,
            })
    }

    /// Send a JSON body and validate the resource the backend answers with
    pub async fn post_json<B, T>(&self, segments: &[&str], payload: &B) -> FrontendResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Validate,
    {
        let url = self.endpoint(segments);

        let response = self.http.post(url.clone()).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FrontendError::BackendRejected {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;

        dto::parse_json(&body).map_err(|source| FrontendError::ShapeViolation {
            url: url.to_string(),
            source,
        })
    }
}
