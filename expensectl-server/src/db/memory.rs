//! In-process `ExpenseStore` used by handler tests

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{DbError, ExpenseStore};
use crate::models::{Expense, ExpenseDraft, ExpenseId};

#[derive(Default)]
pub(crate) struct MemoryExpenseStore {
    rows: Mutex<BTreeMap<ExpenseId, Expense>>,
    failing: bool,
}

impl MemoryExpenseStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like a dropped connection.
    pub(crate) fn failing() -> Self {
        Self {
            rows: Mutex::default(),
            failing: true,
        }
    }

    fn check(&self) -> Result<(), DbError> {
        if self.failing {
            return Err(DbError::Sqlx(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl ExpenseStore for MemoryExpenseStore {
    async fn insert(&self, draft: &ExpenseDraft) -> Result<ExpenseId, DbError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        rows.insert(id, Expense::from_draft(id, draft.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Expense, DbError> {
        self.check()?;
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound { id })
    }

    async fn replace_by_id(&self, id: ExpenseId, draft: &ExpenseDraft) -> Result<(), DbError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) => {
                *row = Expense::from_draft(id, draft.clone());
                Ok(())
            }
            None => Err(DbError::NotFound { id }),
        }
    }

    async fn find_all(&self) -> Result<Vec<Expense>, DbError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.check()
    }
}
