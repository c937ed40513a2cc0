//! Book catalogue calls under `/books`.

use std::fmt::Display;

use serde::Serialize;

use crate::client::{item_path, ApiClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

const BOOKS: &str = "/books";

/// Borrowed view of an `ApiClient` scoped to the book endpoints.
#[derive(Debug)]
pub struct BookService<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> BookService<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn build_get_all(&self, params: &[(String, String)]) -> HttpRequest {
        self.client.request_with_query(HttpMethod::Get, BOOKS.to_string(), params)
    }

    pub fn build_get_by_id(&self, id: impl Display) -> HttpRequest {
        self.client.request(HttpMethod::Get, item_path(BOOKS, id))
    }

    pub fn build_create<B: Serialize + ?Sized>(
        &self,
        payload: &B,
    ) -> Result<HttpRequest, ApiError> {
        self.client.request_with_json(HttpMethod::Post, BOOKS.to_string(), payload)
    }

    pub fn build_update<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        payload: &B,
    ) -> Result<HttpRequest, ApiError> {
        self.client.request_with_json(HttpMethod::Put, item_path(BOOKS, id), payload)
    }

    pub fn build_delete(&self, id: impl Display) -> HttpRequest {
        self.client.request(HttpMethod::Delete, item_path(BOOKS, id))
    }

    pub fn build_get_categories(&self) -> HttpRequest {
        self.client.request(HttpMethod::Get, format!("{BOOKS}/categories"))
    }

    pub fn build_get_available(&self) -> HttpRequest {
        self.client.request(HttpMethod::Get, format!("{BOOKS}/available"))
    }

    /// List books; `params` go to the query string as given
    /// (`page`, `per_page`, `search`, `category` are understood by the server).
    pub async fn get_all(&self, params: &[(String, String)]) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_get_all(params)).await
    }

    pub async fn get_by_id(&self, id: impl Display) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_get_by_id(id)).await
    }

    pub async fn create<B: Serialize + ?Sized>(
        &self,
        payload: &B,
    ) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_create(payload)?).await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        payload: &B,
    ) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_update(id, payload)?).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_delete(id)).await
    }

    pub async fn get_categories(&self) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_get_categories()).await
    }

    /// Books with at least one copy on the shelf.
    pub async fn get_available(&self) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_get_available()).await
    }
}
