//! sqlreview-sdk: client for the SQL review service.
//!
//! Two layers:
//!
//! - [`Client`] is a typed REST client. Each method is one request, grouped
//!   by resource (`connections()`, `llm_configs()`, `statements()`,
//!   `reviews()`).
//! - [`Controller`] turns user actions into client calls. It owns the
//!   [`UiSelectionState`](sqlreview_core::UiSelectionState) between actions
//!   and reports outcomes as notices instead of errors.
//!
//! ```no_run
//! use sqlreview_sdk::{AssumeYes, Client, Controller};
//! use sqlreview_core::UiSelectionState;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect("http://127.0.0.1:8000")?;
//! let mut controller = Controller::new(client, UiSelectionState::default(), Box::new(AssumeYes));
//!
//! if let Some(listing) = controller.load_sql_statements(1).await {
//!     for statement in &listing.page.items {
//!         println!("{} {}", statement.id, statement.display_title());
//!     }
//! }
//! for notice in controller.take_notices() {
//!     eprintln!("{:?}: {}", notice.level, notice.message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The HTTP layer sits behind [`Transport`]; tests substitute an in-memory
//! implementation.

pub mod client;
pub mod controller;
pub mod error;
pub mod transport;

pub use client::Client;
pub use controller::{
    AssumeYes, Confirmer, Controller, ImportOutcome, Mutation, OpenedStatement, RestoreOutcome,
    StatementListing,
};
pub use error::{Error, Result};
pub use transport::{
    ApiRequest, ApiResponse, HttpTransport, Method, MultipartForm, RequestBody, Transport,
};
