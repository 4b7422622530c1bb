use thiserror::Error;

/// Errors that can occur while fetching projects from the backend.
///
/// Every variant is absorbed at the fetch-lifecycle boundary and stored as
/// a single human-readable message in the shared error field; nothing here
/// ever propagates as a panic into the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// A response was received but its status code indicates failure.
    #[error("API call failed with status: {status}")]
    Status {
        /// HTTP status code of the failed response
        status: u16,
    },

    /// The request could not be completed at all (DNS, connection
    /// refused, offline).
    #[error("Could not connect to the backend server: {message}")]
    Network {
        /// Error message from the transport layer
        message: String,
    },

    /// A 2xx response arrived but its body was not a JSON array of
    /// project records.
    ///
    /// This covers both malformed JSON and well-formed JSON of the wrong
    /// shape (e.g. an error object returned with a 200 status). Both are
    /// reported as an API failure rather than surfacing later as a
    /// render-time type mismatch.
    #[error("Unexpected response from the backend: {message}")]
    InvalidBody {
        /// Error message from the decoder
        message: String,
    },

    /// The API base URL was empty or missing at startup.
    #[error("API base URL is not configured")]
    MissingBaseUrl,
}
