//! Repository implementations for database access
//!
//! Handlers talk to storage through the `ExpenseStore` trait so the router
//! can be built over Postgres in production and an in-process store in tests.

pub mod expenses;

use async_trait::async_trait;

use crate::models::{Expense, ExpenseDraft, ExpenseId};

pub use expenses::ExpenseRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: expense '{id}'")]
    NotFound { id: ExpenseId },
}

/// Storage operations behind the expense endpoints.
///
/// Each call is a single round trip; implementations must not cache.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Write a new row and return the id the store assigned.
    async fn insert(&self, draft: &ExpenseDraft) -> Result<ExpenseId, DbError>;

    /// Fetch one row. `DbError::NotFound` when no row has this id.
    async fn find_by_id(&self, id: ExpenseId) -> Result<Expense, DbError>;

    /// Overwrite every mutable field of the row. `DbError::NotFound` when
    /// nothing was updated.
    async fn replace_by_id(&self, id: ExpenseId, draft: &ExpenseDraft) -> Result<(), DbError>;

    /// Every row, in store order. An empty table yields an empty vec.
    async fn find_all(&self) -> Result<Vec<Expense>, DbError>;

    /// Cheap reachability check for health reporting.
    async fn ping(&self) -> Result<(), DbError>;
}
