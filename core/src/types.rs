//! Domain DTOs for the library API.
//!
//! # Design
//! The group services accept any `Serialize` payload and return raw
//! responses, so nothing here is required. These types mirror the server's
//! JSON for callers that want typed payloads or want to decode a response
//! with `HttpResponse::json`. Update payloads only serialize the fields that
//! are set; the server leaves the rest unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Books
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub publication_year: Option<i32>,
    pub category: Option<String>,
    pub total_copies: Option<i32>,
    pub available_copies: Option<i32>,
    pub location: Option<String>,
}

/// Payload for `books().create`. `available_copies` defaults server-side to
/// `total_copies`, which itself defaults to 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBook {
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_copies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_copies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_copies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_copies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookPage {
    pub books: Vec<Book>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Categories {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailableBooks {
    pub books: Vec<Book>,
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    /// Library card number such as `LIB00001`, assigned by the server.
    pub member_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub membership_type: String,
    pub join_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub status: String,
    pub max_books_allowed: i32,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_books_allowed: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_books_allowed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberPage {
    pub members: Vec<Member>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BorrowedBooks {
    pub member: Member,
    pub borrowed_books: Vec<Transaction>,
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    /// Public reference such as `TXN1A2B3C4D`; `return_book` takes this one.
    pub transaction_id: String,
    pub book_id: i64,
    pub book_title: Option<String>,
    pub member_id: i64,
    pub member_name: Option<String>,
    pub transaction_type: String,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub fine_amount: f64,
    pub fine_paid: bool,
    pub status: String,
    pub notes: Option<String>,
}

impl Transaction {
    pub fn has_unpaid_fine(&self) -> bool {
        self.fine_amount > 0.0 && !self.fine_paid
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BorrowRequest {
    pub book_id: i64,
    pub member_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReturnRequest {
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverdueTransactions {
    pub overdue_books: Vec<Transaction>,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryStats {
    pub total_books: u64,
    pub total_members: u64,
    pub active_borrows: u64,
    pub overdue_books: u64,
    pub total_unpaid_fines: f64,
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// Body of successful deletes, e.g. `{"message":"Book deleted successfully"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

/// Body the server attaches to most 4xx answers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

// ---------------------------------------------------------------------------
// List filters
// ---------------------------------------------------------------------------

fn push<V: ToString>(params: &mut Vec<(String, String)>, key: &str, value: &Option<V>) {
    if let Some(value) = value {
        params.push((key.to_string(), value.to_string()));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Matches title, author or ISBN.
    pub search: Option<String>,
    pub category: Option<String>,
}

impl BookQuery {
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        push(&mut params, "page", &self.page);
        push(&mut params, "per_page", &self.per_page);
        push(&mut params, "search", &self.search);
        push(&mut params, "category", &self.category);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Matches names, email or card number.
    pub search: Option<String>,
    pub status: Option<String>,
}

impl MemberQuery {
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        push(&mut params, "page", &self.page);
        push(&mut params, "per_page", &self.per_page);
        push(&mut params, "search", &self.search);
        push(&mut params, "status", &self.status);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
    pub member_id: Option<i64>,
}

impl TransactionQuery {
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        push(&mut params, "page", &self.page);
        push(&mut params, "per_page", &self.per_page);
        push(&mut params, "status", &self.status);
        push(&mut params, "member_id", &self.member_id);
        params
    }
}
