//! Domain models with validation at construction
//!
//! All user input is validated before it reaches the store.
//! Invalid input returns ValidationError, not panic.

pub mod expense;
pub mod validation;

pub use expense::{Expense, ExpenseDraft, ExpenseId};
pub use validation::ValidationError;
