//! expensectl-server: HTTP server for expense records
//!
//! Validates inbound requests, maps them onto a Postgres-backed
//! `ExpenseStore`, and turns storage outcomes back into JSON responses.

pub mod db;
pub mod http;
pub mod models;

pub use db::repos::{DbError, ExpenseRepo, ExpenseStore};
pub use http::{build_router, run_server, serve_with_shutdown, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Expense, ExpenseDraft, ExpenseId, ValidationError};
