//! Member registry calls under `/members`.

use std::fmt::Display;

use serde::Serialize;

use crate::client::{item_path, ApiClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

const MEMBERS: &str = "/members";

#[derive(Debug)]
pub struct MemberService<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> MemberService<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn build_get_all(&self, params: &[(String, String)]) -> HttpRequest {
        self.client.request_with_query(HttpMethod::Get, MEMBERS.to_string(), params)
    }

    pub fn build_get_by_id(&self, id: impl Display) -> HttpRequest {
        self.client.request(HttpMethod::Get, item_path(MEMBERS, id))
    }

    pub fn build_create<B: Serialize + ?Sized>(
        &self,
        payload: &B,
    ) -> Result<HttpRequest, ApiError> {
        self.client.request_with_json(HttpMethod::Post, MEMBERS.to_string(), payload)
    }

    pub fn build_update<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        payload: &B,
    ) -> Result<HttpRequest, ApiError> {
        self.client.request_with_json(HttpMethod::Put, item_path(MEMBERS, id), payload)
    }

    pub fn build_delete(&self, id: impl Display) -> HttpRequest {
        self.client.request(HttpMethod::Delete, item_path(MEMBERS, id))
    }

    pub fn build_get_borrowed(&self, id: impl Display) -> HttpRequest {
        let path = format!("{}/borrowed", item_path(MEMBERS, id));
        self.client.request(HttpMethod::Get, path)
    }

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

    /// The server refuses (400) while the member still holds active borrows.
    pub async fn delete(&self, id: impl Display) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_delete(id)).await
    }

    /// Active borrow transactions of one member.
    pub async fn get_borrowed(&self, id: impl Display) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_get_borrowed(id)).await
    }
}
