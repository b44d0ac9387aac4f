//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// `Transport`, `Decoding` and `EmptyPayload` cover everything the coin
/// endpoint can fail with on a 2xx; the status variants cover the rest.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decoding failed: {0}")]
    Decoding(#[from] serde_json::Error),

    #[error("No data received")]
    EmptyPayload,

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl HttpError {
    /// Map a non-success status code and its body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited,
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            HttpError::from_status(401, String::new()),
            HttpError::Unauthorized
        ));
        assert!(matches!(
            HttpError::from_status(404, "gone".to_string()),
            HttpError::NotFound(body) if body == "gone"
        ));
        assert!(matches!(
            HttpError::from_status(429, String::new()),
            HttpError::RateLimited
        ));
        assert!(matches!(
            HttpError::from_status(418, String::new()),
            HttpError::BadRequest(_)
        ));
        assert!(matches!(
            HttpError::from_status(503, "down".to_string()),
            HttpError::ServerError { status: 503, .. }
        ));
    }

    #[test]
    fn test_sdk_error_display_wraps_http() {
        let err: SdkError = HttpError::EmptyPayload.into();
        assert_eq!(err.to_string(), "HTTP error: No data received");
    }
}
