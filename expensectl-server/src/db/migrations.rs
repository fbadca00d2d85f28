//! Schema bootstrap for the expenses table
//!
//! Runs once at startup. Only creates what is missing; existing tables are
//! left untouched.

use sqlx::PgPool;

/// Create the `expenses` table if it does not exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running expense migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id BIGSERIAL PRIMARY KEY,
            title TEXT,
            amount FLOAT8,
            note TEXT,
            tags TEXT[]
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Expense migrations complete");
    Ok(())
}
