//! Stable transaction ordering for deterministic folds.

use crate::domain::Transaction;
use chrono::NaiveDate;

/// Ordering key for ledger transactions: date first, then id.
///
/// Same-day entries are ordered by the identifier storage assigned them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransactionOrderingKey {
    pub date: NaiveDate,
    pub id: i64,
}

impl TransactionOrderingKey {
    pub fn from_transaction(tx: &Transaction) -> Self {
        TransactionOrderingKey {
            date: tx.date,
            id: tx.id.as_i64(),
        }
    }
}

/// Sort transactions into ledger order.
pub fn sort_transactions(transactions: &mut [Transaction]) {
    transactions.sort_by_key(TransactionOrderingKey::from_transaction);
}

/// Returns true if the slice is already in ledger order.
pub fn is_ledger_ordered(transactions: &[Transaction]) -> bool {
    transactions.windows(2).all(|pair| {
        TransactionOrderingKey::from_transaction(&pair[0])
            <= TransactionOrderingKey::from_transaction(&pair[1])
    })
}
