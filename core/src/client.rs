//! The shared client behind the three group services.
//!
//! # Design
//! `ApiClient` holds the immutable `ClientConfig` and an injected
//! `Transport`, nothing else. Group services borrow it, build an
//! `HttpRequest` per call and hand it to `send`. There is no state carried
//! between calls, so one client can serve any number of concurrent futures.

use std::fmt::Display;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::books::BookService;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::members::MemberService;
use crate::transactions::TransactionService;

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: Arc<ClientConfig>,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn books(&self) -> BookService<'_, T> {
        BookService::new(self)
    }

    pub fn members(&self) -> MemberService<'_, T> {
        MemberService::new(self)
    }

    pub fn transactions(&self) -> TransactionService<'_, T> {
        TransactionService::new(self)
    }

    /// Execute one request. 2xx resolves to the raw response; any other
    /// status becomes `ApiError::Status` carrying that response unchanged.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, path = %request.path, "dispatching request");
        let response = self.transport.execute(request).await?;
        if response.is_success() {
            return Ok(response);
        }
        debug!(status = response.status, "request returned non-success status");
        Err(ApiError::Status {
            status: response.status,
            response,
        })
    }

    /// Request for `path` carrying the configured base URL and default headers.
    pub(crate) fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            base_url: self.config.base_url().to_string(),
            path,
            query: Vec::new(),
            headers: self.config.default_headers().to_vec(),
            body: None,
        }
    }

    pub(crate) fn request_with_query(
        &self,
        method: HttpMethod,
        path: String,
        params: &[(String, String)],
    ) -> HttpRequest {
        HttpRequest {
            query: params.to_vec(),
            ..self.request(method, path)
        }
    }

    pub(crate) fn request_with_json<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: String,
        payload: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            body: Some(body),
            ..self.request(method, path)
        })
    }
}

/// `{collection}/{id}` with the identifier written exactly as `Display` renders it.
pub(crate) fn item_path(collection: &str, id: impl Display) -> String {
    format!("{collection}/{id}")
}
