//! Error types for the tastytrade API client.
//!
//! Every failure surfaces as a single [`Error`] value. Errors decoded from
//! the API's `{"error": {...}}` envelope carry the provider's code, message,
//! field-level details, and the HTTP status. Local failures (no session,
//! transport failure, encode/decode failure) carry status `0`.
//!
//! All variants render with the same layout:
//!
//! ```text
//!
//! Error in request 401;
//! Code: unauthorized
//! Message: Unauthorized
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::query::QueryError;

/// A specialized `Result` type for tastytrade operations.
pub type Result<T> = std::result::Result<T, Error>;

/// HTTP statuses whose bodies are decoded as an error envelope.
pub const KNOWN_ERROR_STATUSES: [u16; 7] = [400, 401, 403, 404, 415, 422, 500];

/// Returns `true` if `status` belongs to [`KNOWN_ERROR_STATUSES`].
pub fn is_known_error_status(status: u16) -> bool {
    KNOWN_ERROR_STATUSES.contains(&status)
}

/// Error payload returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code (e.g. `unauthorized`)
    #[serde(default)]
    pub code: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Literal HTTP status of the response
    #[serde(skip)]
    pub status_code: u16,
    /// Field-level sub-errors
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Field or area the error applies to
    #[serde(default)]
    pub domain: String,
    /// Why it failed
    #[serde(default)]
    pub reason: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nError in request {};\nCode: {}\nMessage: {}",
            self.status_code, self.code, self.message
        )
    }
}

impl std::error::Error for ApiError {}

/// Wire shape of an error response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiError,
}

impl ApiError {
    /// Decode an error envelope from a response body.
    ///
    /// A body that does not decode yields a synthetic error carrying the
    /// status and the decode failure.
    pub(crate) fn from_body(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => ApiError {
                status_code: status,
                ..envelope.error
            },
            Err(err) => ApiError {
                code: "unknown_error".to_string(),
                message: format!("failed to decode error response: {}", err),
                status_code: status,
                errors: Vec::new(),
            },
        }
    }
}

/// The error type for all tastytrade operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with an error envelope
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An authenticated call was attempted without a session token
    #[error("\nError in request 0;\nCode: invalid_session\nMessage: no session token; create a session first")]
    InvalidSession,

    /// The request could not be built or performed
    #[error("\nError in request 0;\nCode: http_error\nMessage: {0}")]
    Http(#[from] reqwest::Error),

    /// A request body or response payload failed to (de)serialize
    #[error("\nError in request 0;\nCode: json_error\nMessage: {0}")]
    Json(#[from] serde_json::Error),

    /// Query parameters failed to encode
    #[error("\nError in request 0;\nCode: query_error\nMessage: failed to marshal query: {0}")]
    Query(#[from] QueryError),

    /// URL could not be parsed or extended
    #[error("\nError in request 0;\nCode: url_error\nMessage: {0}")]
    Url(#[from] url::ParseError),

    /// A header name or value was rejected
    #[error("\nError in request 0;\nCode: invalid_header\nMessage: {0}")]
    InvalidHeader(String),

    /// Invalid input provided to a function
    #[error("\nError in request 0;\nCode: invalid_input\nMessage: {0}")]
    InvalidInput(String),

    /// The endpoint answered without the expected payload
    #[error("\nError in request 0;\nCode: empty_response\nMessage: {0} returned no content")]
    EmptyResponse(String),
}

impl Error {
    /// HTTP status of an API error; `0` for client-side failures.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Api(err) => err.status_code,
            _ => 0,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &str {
        match self {
            Error::Api(err) => &err.code,
            Error::InvalidSession => "invalid_session",
            Error::Http(_) => "http_error",
            Error::Json(_) => "json_error",
            Error::Query(_) => "query_error",
            Error::Url(_) => "url_error",
            Error::InvalidHeader(_) => "invalid_header",
            Error::InvalidInput(_) => "invalid_input",
            Error::EmptyResponse(_) => "empty_response",
        }
    }

    /// Human-readable message without the request header lines.
    pub fn message(&self) -> String {
        match self {
            Error::Api(err) => err.message.clone(),
            Error::InvalidSession => "no session token; create a session first".to_string(),
            Error::Http(err) => err.to_string(),
            Error::Json(err) => err.to_string(),
            Error::Query(err) => format!("failed to marshal query: {}", err),
            Error::Url(err) => err.to_string(),
            Error::InvalidHeader(msg) | Error::InvalidInput(msg) => msg.clone(),
            Error::EmptyResponse(what) => format!("{} returned no content", what),
        }
    }

    /// Field-level details of an API error.
    pub fn details(&self) -> &[ErrorDetail] {
        match self {
            Error::Api(err) => &err.errors,
            _ => &[],
        }
    }

    /// Returns `true` if the error came from the API rather than from
    /// this process.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    /// Returns `true` for a missing session or a 401/403 answer.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::InvalidSession => true,
            Error::Api(err) => matches!(err.status_code, 401 | 403),
            _ => false,
        }
    }

    /// Returns `true` if the API rejected the request as malformed or the
    /// input never left this process.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api(err) => (400..500).contains(&err.status_code),
            Error::InvalidInput(_) | Error::InvalidHeader(_) | Error::Query(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if the API reported a server-side failure.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api(err) => err.status_code >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_envelope() {
        let body = br#"{
            "error": {
                "code": "validation_error",
                "message": "Request validation failed",
                "errors": [
                    {"domain": "price", "reason": "must be positive"}
                ]
            }
        }"#;

        let err = ApiError::from_body(422, body);
        assert_eq!(err.status_code, 422);
        assert_eq!(err.code, "validation_error");
        assert_eq!(err.message, "Request validation failed");
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].domain, "price");
        assert_eq!(err.errors[0].reason, "must be positive");
    }

    #[test]
    fn test_api_error_fallback_on_bad_body() {
        let err = ApiError::from_body(500, b"<html>oops</html>");
        assert_eq!(err.status_code, 500);
        assert_eq!(err.code, "unknown_error");
        assert!(err.message.starts_with("failed to decode error response"));
    }

    #[test]
    fn test_display_layout() {
        let err = Error::Api(ApiError {
            code: "unauthorized".to_string(),
            message: "Unauthorized".to_string(),
            status_code: 401,
            errors: Vec::new(),
        });
        assert_eq!(
            err.to_string(),
            "\nError in request 401;\nCode: unauthorized\nMessage: Unauthorized"
        );

        assert_eq!(
            Error::InvalidSession.to_string(),
            "\nError in request 0;\nCode: invalid_session\nMessage: no session token; create a session first"
        );
    }

    #[test]
    fn test_classification() {
        let unauthorized = Error::Api(ApiError {
            status_code: 401,
            ..Default::default()
        });
        assert!(unauthorized.is_auth_error());
        assert!(unauthorized.is_client_error());
        assert!(!unauthorized.is_server_error());
        assert_eq!(unauthorized.status_code(), 401);

        let server = Error::Api(ApiError {
            status_code: 500,
            ..Default::default()
        });
        assert!(server.is_server_error());

        assert!(Error::InvalidSession.is_auth_error());
        assert_eq!(Error::InvalidSession.status_code(), 0);
        assert!(Error::InvalidInput("bad".into()).is_client_error());
    }

    #[test]
    fn test_known_error_statuses() {
        for status in [400, 401, 403, 404, 415, 422, 500] {
            assert!(is_known_error_status(status));
        }
        assert!(!is_known_error_status(204));
        assert!(!is_known_error_status(429));
        assert!(!is_known_error_status(502));
    }
}
