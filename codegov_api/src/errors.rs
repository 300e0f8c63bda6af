//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// `Clone` because a memoized response may be handed to several concurrent
/// callers, all of which receive the same outcome.
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unexpected response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not valid JSON, or did not match the expected shape.
    #[error("Invalid JSON in response: {0}")]
    Json(String),
    /// The configured maximum number of outbound requests has been reached.
    #[error("Request ceiling of {0} reached")]
    RequestCeiling(u64),
}
