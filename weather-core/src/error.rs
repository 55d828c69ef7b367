use reqwest::StatusCode;
use thiserror::Error;

/// Ways a single lookup can fail. The `Display` text is what ends up in the
/// error region.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response was received (DNS, connection, body read).
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered 404 for the requested city.
    #[error("City not found")]
    NotFound,

    /// Any other non-success status.
    #[error("Request failed: {reason}")]
    RequestFailed { status: StatusCode, reason: String },

    /// A success status whose body does not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// Flatten a transport error and its source chain into one message.
    /// The URL is dropped since its query string carries the API key.
    pub fn network(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        FetchError::Network(message)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }
}
