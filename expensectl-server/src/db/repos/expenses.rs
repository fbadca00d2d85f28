//! Expense repository
//!
//! Tags are stored in a native `TEXT[]` column, so each tag round-trips
//! exactly (order, empty strings and punctuation included).

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::{DbError, ExpenseStore};
use crate::models::{Expense, ExpenseDraft, ExpenseId};

/// Row as stored. Columns other than `id` are nullable in the schema.
#[derive(Debug, Clone, FromRow)]
struct ExpenseRow {
    id: ExpenseId,
    title: Option<String>,
    amount: Option<f64>,
    note: Option<String>,
    tags: Option<Vec<String>>,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Self {
            id: row.id,
            title: row.title.unwrap_or_default(),
            amount: row.amount.unwrap_or_default(),
            note: row.note.unwrap_or_default(),
            tags: row.tags.unwrap_or_default(),
        }
    }
}

/// Postgres-backed expense repository
#[derive(Debug, Clone)]
pub struct ExpenseRepo {
    pool: PgPool,
}

impl ExpenseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseStore for ExpenseRepo {
    async fn insert(&self, draft: &ExpenseDraft) -> Result<ExpenseId, DbError> {
        let (id,): (ExpenseId,) = sqlx::query_as(
            r#"
            INSERT INTO expenses (title, amount, note, tags)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&draft.title)
        .bind(draft.amount)
        .bind(&draft.note)
        .bind(&draft.tags)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: ExpenseId) -> Result<Expense, DbError> {
        let row: ExpenseRow = sqlx::query_as(
            r#"
            SELECT id, title, amount, note, tags
            FROM expenses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound { id })?;

        Ok(row.into())
    }

    async fn replace_by_id(&self, id: ExpenseId, draft: &ExpenseDraft) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET title = $1, amount = $2, note = $3, tags = $4
            WHERE id = $5
            "#,
        )
        .bind(&draft.title)
        .bind(draft.amount)
        .bind(&draft.note)
        .bind(&draft.tags)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Expense>, DbError> {
        let rows: Vec<ExpenseRow> = sqlx::query_as(
            r#"
            SELECT id, title, amount, note, tags
            FROM expenses
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
