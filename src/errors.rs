use std::error::Error as StdError;
use thiserror::Error;
use url::Url;

/// Result type alias for Kibana API operations
pub type Result<T> = std::result::Result<T, KibanaError>;

/// Code reported by [`KibanaError::status_code`] for local validation failures.
///
/// It sits outside the HTTP status range so it can never collide with a real
/// server response.
pub const VALIDATION_ERROR_CODE: u16 = 600;

/// Errors that can occur when talking to the Kibana alerting and actions APIs
#[derive(Debug, Error)]
pub enum KibanaError {
    /// Input rejected before any request was sent
    #[error("Invalid request: {message}")]
    Validation {
        /// What was missing or malformed
        message: String,
    },

    /// Failed to build HTTP client
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// The configured base URL cannot carry path segments
    #[error("Base URL cannot be used to build API paths: {0}")]
    InvalidBaseUrl(Url),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest_middleware::Error),

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// Failed to serialize a request body
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Failed to deserialize a response body
    #[error("Failed to deserialize response body: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// Kibana returned a status outside the operation's success range
    #[error("Kibana API error: HTTP {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },
}

impl KibanaError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Status code carried by the error
    ///
    /// Returns the HTTP status for [`KibanaError::Api`],
    /// [`VALIDATION_ERROR_CODE`] for [`KibanaError::Validation`] and `None`
    /// for transport, encoding and configuration failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Validation { .. } => Some(VALIDATION_ERROR_CODE),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the error was raised locally, before any request
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if Kibana answered with 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Check if the error is retryable
    ///
    /// Returns `true` for:
    /// - Network/connection errors
    /// - Timeout errors
    /// - Server errors (5xx status codes)
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(source) => {
                if let reqwest_middleware::Error::Reqwest(err) = source {
                    return err.is_connect() || err.is_timeout();
                }
                if let Some(inner) = StdError::source(source) {
                    if let Some(err) = inner.downcast_ref::<reqwest::Error>() {
                        return err.is_connect() || err.is_timeout();
                    }
                }
                false
            }
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_retryable_5xx() {
        for status in [500, 502, 503] {
            let error = KibanaError::Api {
                status,
                message: "server error".to_string(),
            };
            assert!(error.is_retryable());
        }
    }

    #[test]
    fn test_api_error_not_retryable_4xx() {
        for status in [400, 401, 403, 404, 409] {
            let error = KibanaError::Api {
                status,
                message: "client error".to_string(),
            };
            assert!(!error.is_retryable());
        }
    }

    #[test]
    fn test_validation_error_code() {
        let error = KibanaError::validation("You must provide an alert rule ID");
        assert!(error.is_validation());
        assert!(!error.is_retryable());
        assert_eq!(error.status_code(), Some(VALIDATION_ERROR_CODE));
        assert_eq!(
            error.to_string(),
            "Invalid request: You must provide an alert rule ID"
        );
    }

    #[test]
    fn test_not_found_only_for_api_404() {
        let error = KibanaError::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert!(error.is_not_found());
        assert_eq!(error.status_code(), Some(404));

        assert!(!KibanaError::validation("missing").is_not_found());
    }

    #[test]
    fn test_error_display() {
        let error = KibanaError::Api {
            status: 500,
            message: "Internal server error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Kibana API error: HTTP 500 - Internal server error"
        );
    }

    #[test]
    fn test_encoding_errors_have_no_status() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let error = KibanaError::Deserialize(json_err);
        assert!(!error.is_retryable());
        assert_eq!(error.status_code(), None);
    }
}
