//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. The group services build
//! `HttpRequest` values without touching the network; a `Transport`
//! executes them and hands back an `HttpResponse`. Tests can swap the
//! transport for a recorder, and callers that already own an HTTP stack can
//! skip the transport entirely and execute `build_*` output themselves.
//!
//! All fields use owned types so requests can be moved across tasks and
//! threads without lifetime concerns.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `path` is relative to `base_url` (for example `/books/42`). `query` holds
/// the caller's parameters exactly as supplied; they are only encoded when
/// `url()` assembles the final address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub base_url: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Full request URL: base URL, path, then the query pairs in order.
    pub fn url(&self) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, self.path))?;
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Transports return every status as data; `ApiClient::send` decides what
/// counts as a failure. Header values and the body are kept as the raw bytes
/// the server sent, whatever their charset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, Bytes)>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup; `None` if absent or not valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_bytes(name).and_then(|v| std::str::from_utf8(v).ok())
    }

    /// Case-insensitive header lookup returning the raw value.
    pub fn header_bytes(&self, name: &str) -> Option<&[u8]> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_ref())
    }

    /// Body as UTF-8 text, without any lossy replacement.
    pub fn text(&self) -> Result<&str, ApiError> {
        Ok(std::str::from_utf8(&self.body)?)
    }

    /// Decode the body as JSON. The client never calls this on its own.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(ApiError::Deserialization)
    }
}

/// Executes one `HttpRequest` and returns whatever the server answered.
///
/// Implementations must not retry and must not treat non-2xx statuses as
/// errors; only failures to obtain a response at all are `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request).await
    }
}
