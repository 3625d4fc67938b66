use super::{transaction_from_row, Repository, DATE_FORMAT, TRANSACTION_COLUMNS};
use crate::domain::{Customer, NewTransaction, Transaction, TransactionId};
use sqlx::{Sqlite, SqliteExecutor};
use tracing::{debug, info};

const INSERT_TRANSACTION: &str = r#"
    INSERT INTO transactions (
        date, customer, description, kind, purity,
        quantity, unit, currency, amount, created_at
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

async fn insert_one<'e, E>(executor: E, tx: &NewTransaction) -> Result<TransactionId, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query::<Sqlite>(INSERT_TRANSACTION)
        .bind(tx.date.format(DATE_FORMAT).to_string())
        .bind(tx.customer.as_str())
        .bind(tx.description.as_str())
        .bind(tx.kind.as_label())
        .bind(tx.purity.as_label())
        .bind(tx.quantity.to_canonical_string())
        .bind(tx.unit.as_str())
        .bind(tx.currency.as_ref().map(|c| c.as_label().to_string()))
        .bind(tx.amount.to_canonical_string())
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(executor)
        .await?;

    Ok(TransactionId::new(result.last_insert_rowid()))
}

impl Repository {
    /// Append one transaction.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_transaction(
        &self,
        tx: &NewTransaction,
    ) -> Result<TransactionId, sqlx::Error> {
        let id = insert_one(&self.pool, tx).await?;
        debug!(id = id.as_i64(), customer = %tx.customer, "Transaction stored");
        Ok(id)
    }

    /// Append a batch inside one SQL transaction. Any failure rolls back the
    /// whole batch.
    ///
    /// # Errors
    /// Returns an error if the transaction fails.
    pub async fn insert_transactions_batch(
        &self,
        batch: &[NewTransaction],
    ) -> Result<usize, sqlx::Error> {
        if batch.is_empty() {
            return Ok(0);
        }

        let mut db_tx = self.pool.begin().await?;
        for tx in batch {
            insert_one(&mut *db_tx, tx).await?;
        }
        db_tx.commit().await?;

        info!(count = batch.len(), "Transaction batch stored");
        Ok(batch.len())
    }

    /// All transactions of a customer in ledger order: date, then id.
    ///
    /// # Errors
    /// Returns an error if the query fails or a stored value cannot be decoded.
    pub async fn query_transactions(
        &self,
        customer: &Customer,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM transactions WHERE customer = ? ORDER BY date ASC, id ASC",
            TRANSACTION_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(customer.as_str())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(transaction_from_row).collect()
    }

    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_transaction(
        &self,
        id: TransactionId,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let sql = format!("SELECT {} FROM transactions WHERE id = ?", TRANSACTION_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(transaction_from_row).transpose()
    }

    /// Delete by id. Returns false when no such transaction exists.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(id = id.as_i64(), "Transaction deleted");
        }
        Ok(deleted)
    }
}
