//! Error types for the library API client.
//!
//! # Design
//! Nothing is translated or swallowed. A non-2xx answer keeps the whole
//! `HttpResponse` so callers see exactly what the server sent, and transport
//! failures keep the transport's own error as `source`.

use std::borrow::Cow;

use thiserror::Error;

use crate::http::HttpResponse;

/// Boxed error produced by a transport implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by `ApiClient` and the group services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status outside 2xx.
    #[error("HTTP {status}: {}", lossy_body(.response))]
    Status { status: u16, response: HttpResponse },

    /// No response was obtained (connection refused, timeout, broken body).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Base URL and path do not form a valid URL.
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// `HttpResponse::text` was called on a body that is not UTF-8.
    #[error("response body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The response body could not be decoded into the requested type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),
}

/// Display-only rendering; the response itself is never altered.
fn lossy_body(response: &HttpResponse) -> Cow<'_, str> {
    String::from_utf8_lossy(&response.body)
}

impl ApiError {
    pub fn transport(err: impl Into<BoxError>) -> Self {
        ApiError::Transport(err.into())
    }

    /// HTTP status when the server answered, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            ApiError::Status { response, .. } => Some(response),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn status_error(status: u16, body: &[u8]) -> ApiError {
        ApiError::Status {
            status,
            response: HttpResponse {
                status,
                headers: Vec::new(),
                body: Bytes::copy_from_slice(body),
            },
        }
    }

    #[test]
    fn status_error_displays_body() {
        let err = status_error(400, br#"{"error":"No copies available for borrowing"}"#);
        assert_eq!(
            err.to_string(),
            r#"HTTP 400: {"error":"No copies available for borrowing"}"#
        );
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_a_status_error() {
        let err = status_error(404, b"");
        assert!(err.is_not_found());
        assert_eq!(err.response().map(|r| r.status), Some(404));
    }

    #[test]
    fn status_error_keeps_non_utf8_body_intact() {
        let err = status_error(502, &[0xff, 0xfe, 0x41]);
        assert_eq!(&err.response().unwrap().body[..], &[0xff, 0xfe, 0x41]);
        assert_eq!(err.to_string(), "HTTP 502: \u{fffd}\u{fffd}A");
    }

    #[test]
    fn transport_error_has_no_status() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ApiError::transport(io);
        assert_eq!(err.status(), None);
        assert!(err.response().is_none());
        assert_eq!(err.to_string(), "transport error: refused");
        assert!(std::error::Error::source(&err).is_some());
    }
}
