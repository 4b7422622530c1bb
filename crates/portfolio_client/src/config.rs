use crate::error::FetchError;

/// Resource path of the projects collection, relative to the base URL.
const PROJECTS_PATH: &str = "/api/projects/";

/// Explicit API configuration, injected at startup.
///
/// The base URL is always passed in by the embedding application (from
/// build-time configuration, a test harness, etc.); the library never
/// reads it from an ambient global. An empty value is rejected up front
/// so a missing configuration fails fast instead of producing a request
/// to a nonsense URL.
///
/// # Example
///
/// ```rust
/// use portfolio_client::ApiConfig;
///
/// let config = ApiConfig::new("http://localhost:8000").unwrap();
/// assert_eq!(config.projects_url(), "http://localhost:8000/api/projects/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a configuration from a base URL such as
    /// `http://localhost:8000`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingBaseUrl`] if the value is empty or
    /// whitespace-only.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(FetchError::MissingBaseUrl);
        }
        Ok(Self { base_url })
    }

    /// The configured base URL, exactly as supplied.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the projects collection.
    ///
    /// A trailing slash on the base URL is tolerated, so
    /// `http://host` and `http://host/` both produce
    /// `http://host/api/projects/`.
    pub fn projects_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PROJECTS_PATH)
    }
}
