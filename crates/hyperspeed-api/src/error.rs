use thiserror::Error;

/// Top-level error type for the `hyperspeed-api` crate.
///
/// Every accessor call surfaces one of exactly two failure families:
/// a server-reported error (the body's `error` field, verbatim) or a
/// transport/unexpected failure. 4xx and 5xx are not distinguished at
/// the type level; the numeric status rides along as data.
#[derive(Debug, Error)]
pub enum Error {
    /// Error reported by the Hyperspeed API in the response body.
    ///
    /// `Display` is the server's message verbatim (e.g. a bad slug
    /// yields the server's "not found" string, nothing prepended).
    #[error("{message}")]
    Api { message: String, status: u16 },

    /// HTTP transport error (connection refused, DNS failure, or a
    /// non-2xx status with no `error` field in the body).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The API key cannot be carried in an HTTP header.
    #[error("Invalid API key: {message}")]
    InvalidApiKey { message: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the server reported this error in the body's
    /// `error` field (as opposed to a transport-level failure).
    pub fn is_server_reported(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api { status: 404, .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// The HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
