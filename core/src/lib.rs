//! Asynchronous API client for the library-management service.
//!
//! # Overview
//! One configured `ApiClient` (base URL plus default headers) exposes three
//! groups of REST calls: `books()`, `members()` and `transactions()`. Each
//! call builds exactly one `HttpRequest`, hands it to the injected
//! `Transport` and returns the raw `HttpResponse`.
//!
//! # Design
//! - Every operation has a pure `build_*` twin, so the request can be
//!   inspected or executed by a caller-owned HTTP stack.
//! - Responses are not reshaped. Non-2xx answers become
//!   `ApiError::Status` with the response attached; nothing is retried.
//! - Typed DTOs in `types` are opt-in; payloads are any `Serialize` value.
//!
//! ```no_run
//! # async fn demo() -> Result<(), library_core::ApiError> {
//! use library_core::{ApiClient, BookQuery, ClientConfig};
//!
//! let client = ApiClient::with_reqwest(ClientConfig::from_env());
//! let query = BookQuery { search: Some("Tolkien".into()), ..Default::default() };
//! let response = client.books().get_all(&query.to_params()).await?;
//! println!("{}", response.text()?);
//! # Ok(())
//! # }
//! ```

pub mod books;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod members;
pub mod transactions;
#[cfg(feature = "reqwest")]
pub mod transport;
pub mod types;

pub use books::BookService;
pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, ENV_BASE_URL};
pub use error::{ApiError, BoxError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use members::MemberService;
pub use transactions::TransactionService;
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use types::{
    AvailableBooks, Book, BookPage, BookQuery, BookUpdate, BorrowRequest, BorrowedBooks,
    Categories, ErrorBody, LibraryStats, Member, MemberPage, MemberQuery, MemberUpdate, Message,
    NewBook, NewMember, OverdueTransactions, ReturnRequest, Transaction, TransactionPage,
    TransactionQuery,
};
