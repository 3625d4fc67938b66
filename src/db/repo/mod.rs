//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules:
//! - `transactions.rs` - append, ordered retrieval and deletion of ledger rows

mod transactions;

use crate::domain::{Currency, Customer, Decimal, Purity, Transaction, TransactionId, TransactionKind};
use chrono::NaiveDate;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

/// Columns selected for every `Transaction` read.
const TRANSACTION_COLUMNS: &str =
    "id, date, customer, description, kind, purity, quantity, unit, currency, amount";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Round-trip to the database; used by readiness checks.
    ///
    /// # Errors
    /// Returns an error if the database is unreachable.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Distinct customers with at least one transaction, ascending.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, sqlx::Error> {
        let rows = sqlx::query("SELECT DISTINCT customer FROM transactions ORDER BY customer ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Customer::new(row.get::<String, _>("customer")))
            .collect())
    }
}

fn decode_error(column: &str, value: &str, err: impl std::fmt::Display) -> sqlx::Error {
    sqlx::Error::Decode(format!("invalid {} {:?}: {}", column, value, err).into())
}

fn decode_decimal(row: &SqliteRow, column: &str) -> Result<Decimal, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    Decimal::from_str_canonical(&raw).map_err(|e| decode_error(column, &raw, e))
}

/// Map a row selected with `TRANSACTION_COLUMNS`.
fn transaction_from_row(row: &SqliteRow) -> Result<Transaction, sqlx::Error> {
    let date_raw: String = row.try_get("date")?;
    let date = NaiveDate::parse_from_str(&date_raw, DATE_FORMAT)
        .map_err(|e| decode_error("date", &date_raw, e))?;
    let customer: String = row.try_get("customer")?;
    let kind: String = row.try_get("kind")?;
    let purity: String = row.try_get("purity")?;
    let currency: Option<String> = row.try_get("currency")?;

    Ok(Transaction {
        id: TransactionId::new(row.try_get("id")?),
        date,
        customer: Customer::new(customer),
        description: row.try_get("description")?,
        kind: TransactionKind::parse(&kind),
        purity: Purity::parse(&purity),
        quantity: decode_decimal(row, "quantity")?,
        unit: row.try_get("unit")?,
        currency: currency.as_deref().and_then(Currency::parse),
        amount: decode_decimal(row, "amount")?,
    })
}
