//! Circulation calls under `/transactions`: borrowing, returns, fines.

use std::fmt::Display;

use serde::Serialize;

use crate::client::{item_path, ApiClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

const TRANSACTIONS: &str = "/transactions";

#[derive(Debug)]
pub struct TransactionService<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> TransactionService<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn build_get_all(&self, params: &[(String, String)]) -> HttpRequest {
        self.client.request_with_query(HttpMethod::Get, TRANSACTIONS.to_string(), params)
    }

    pub fn build_borrow_book<B: Serialize + ?Sized>(
        &self,
        payload: &B,
    ) -> Result<HttpRequest, ApiError> {
        self.client.request_with_json(HttpMethod::Post, format!("{TRANSACTIONS}/borrow"), payload)
    }

    pub fn build_return_book<B: Serialize + ?Sized>(
        &self,
        payload: &B,
    ) -> Result<HttpRequest, ApiError> {
        self.client.request_with_json(HttpMethod::Post, format!("{TRANSACTIONS}/return"), payload)
    }

    pub fn build_get_overdue(&self) -> HttpRequest {
        self.client.request(HttpMethod::Get, format!("{TRANSACTIONS}/overdue"))
    }

    /// POST without a body; the transaction is named by the path alone.
    pub fn build_pay_fine(&self, id: impl Display) -> HttpRequest {
        self.client.request(
            HttpMethod::Post,
            item_path(&format!("{TRANSACTIONS}/pay-fine"), id),
        )
    }

    pub fn build_get_stats(&self) -> HttpRequest {
        self.client.request(HttpMethod::Get, format!("{TRANSACTIONS}/stats"))
    }

    /// Newest first; the server understands `page`, `per_page`, `status`, `member_id`.
    pub async fn get_all(&self, params: &[(String, String)]) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_get_all(params)).await
    }

    pub async fn borrow_book<B: Serialize + ?Sized>(
        &self,
        payload: &B,
    ) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_borrow_book(payload)?).await
    }

    pub async fn return_book<B: Serialize + ?Sized>(
        &self,
        payload: &B,
    ) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_return_book(payload)?).await
    }

    pub async fn get_overdue(&self) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_get_overdue()).await
    }

    pub async fn pay_fine(&self, id: impl Display) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_pay_fine(id)).await
    }

    pub async fn get_stats(&self) -> Result<HttpResponse, ApiError> {
        self.client.send(self.build_get_stats()).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::config::ClientConfig;
    use crate::types::{BorrowRequest, ReturnRequest, TransactionQuery};

    struct Unreachable;

    #[async_trait]
    impl Transport for Unreachable {
        async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            unreachable!("build_* never executes")
        }
    }

    fn client() -> ApiClient<Unreachable> {
        ApiClient::new(ClientConfig::default(), Unreachable)
    }

    #[test]
    fn build_get_all_with_member_filter() {
        let query = TransactionQuery {
            member_id: Some(4),
            status: Some("overdue".to_string()),
            ..TransactionQuery::default()
        };
        let req = client().transactions().build_get_all(&query.to_params());
        assert_eq!(req.path, "/transactions");
        assert_eq!(
            req.query,
            vec![
                ("status".to_string(), "overdue".to_string()),
                ("member_id".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn build_borrow_book_posts_payload() {
        let req = client()
            .transactions()
            .build_borrow_book(&BorrowRequest { book_id: 1, member_id: 2 })
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/transactions/borrow");
        assert_eq!(req.body.as_deref(), Some(r#"{"book_id":1,"member_id":2}"#));
        assert_eq!(req.header("content-type"), Some("application/json"));
    }

    #[test]
    fn build_return_book_posts_payload() {
        let req = client()
            .transactions()
            .build_return_book(&ReturnRequest {
                transaction_id: "TXN1A2B3C4D".to_string(),
            })
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/transactions/return");
        assert_eq!(req.body.as_deref(), Some(r#"{"transaction_id":"TXN1A2B3C4D"}"#));
    }

    #[test]
    fn build_pay_fine_has_no_body() {
        let req = client().transactions().build_pay_fine(17);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/transactions/pay-fine/17");
        assert!(req.body.is_none());
    }

    #[test]
    fn static_lookups_use_fixed_paths() {
        let c = client();
        assert_eq!(c.transactions().build_get_overdue().path, "/transactions/overdue");
        assert_eq!(c.transactions().build_get_stats().path, "/transactions/stats");
    }
}
