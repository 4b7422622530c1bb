use async_trait::async_trait;
use portfolio_common::Project;

use crate::config::ApiConfig;
use crate::error::FetchError;

/// Transport seam for the fetch lifecycle.
///
/// The provider installs [`HttpProjectsApi`] by default; tests (or
/// alternative backends) inject their own implementation, so the
/// lifecycle is exercisable with an arbitrary base URL or no network at
/// all.
///
/// Futures are `?Send` because the WASM fetch future is not `Send`; the
/// whole client runs on the single browser thread anyway.
#[async_trait(?Send)]
pub trait ProjectsApi {
    /// Performs one GET of the projects collection.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] when the request could not be
    /// completed, [`FetchError::Status`] for a non-2xx response, and
    /// [`FetchError::InvalidBody`] when a 2xx body is not a JSON array
    /// of project records.
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError>;
}

/// HTTP transport backed by `reqwest` (the browser's `fetch` on WASM).
///
/// One plain GET per call: no extra parameters, headers, or body, no
/// retry policy, no timeout, no cancellation.
#[derive(Clone, Debug)]
pub struct HttpProjectsApi {
    client: reqwest::Client,
    url: String,
}

impl HttpProjectsApi {
    /// Build the transport for the configured base URL.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.projects_url(),
        }
    }

    /// The absolute URL this transport requests.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl ProjectsApi for HttpProjectsApi {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| FetchError::Network {
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|err| FetchError::Network {
            message: err.to_string(),
        })?;

        decode_projects(&body)
    }
}

/// Decode a response body into project records.
///
/// A 200 response whose body is not a JSON array (e.g. an error object
/// smuggled in with a success status) is reported as
/// [`FetchError::InvalidBody`] here, at the fetch boundary, instead of
/// surfacing later as a render-time type mismatch.
pub fn decode_projects(body: &str) -> Result<Vec<Project>, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|err| FetchError::InvalidBody {
            message: err.to_string(),
        })?;

    if !value.is_array() {
        return Err(FetchError::InvalidBody {
            message: "expected a JSON array of projects".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|err| FetchError::InvalidBody {
        message: err.to_string(),
    })
}
