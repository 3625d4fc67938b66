//! Pure balance computation engine.
//!
//! Folds one customer's ordered transactions into running balances over
//! four independent dimensions: fine-metal weight, USD, EUR and TRY.

use crate::domain::{Decimal, Transaction, TransactionKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod accumulator;
pub mod coefficient;
pub mod sign;

pub use accumulator::{contributions, fold, BalanceAccumulator};
pub use coefficient::{coefficient, resolve_label};
pub use sign::{signs, Sign, Signs};

/// The four running balances. Used both as opening balances and as the
/// per-row snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balances {
    /// Fine-metal-equivalent grams.
    pub weight: Decimal,
    pub usd: Decimal,
    pub eur: Decimal,
    #[serde(rename = "try")]
    pub try_: Decimal,
}

impl Balances {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// A transaction together with its contributions and the balances after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedRow {
    pub transaction: Transaction,
    pub weight_contribution: Decimal,
    /// Signed amount in the row's currency; counted in no balance when the
    /// currency is absent or unrecognized.
    pub monetary_contribution: Decimal,
    pub balances: Balances,
}

/// Latest state of a customer's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub balances: Balances,
    pub last_date: NaiveDate,
    pub last_kind: TransactionKind,
    pub row_count: usize,
}

impl LedgerSummary {
    /// Summary of a computed sequence; `None` when it is empty.
    pub fn from_rows(rows: &[ComputedRow]) -> Option<Self> {
        let last = rows.last()?;
        Some(LedgerSummary {
            balances: last.balances,
            last_date: last.transaction.date,
            last_kind: last.transaction.kind.clone(),
            row_count: rows.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Currency, Customer, Purity, TransactionId};

    #[test]
    fn test_summary_of_empty_sequence() {
        assert!(LedgerSummary::from_rows(&[]).is_none());
    }

    #[test]
    fn test_summary_uses_last_row() {
        let make = |id: i64, day: u32, kind: TransactionKind| Transaction {
            id: TransactionId::new(id),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            customer: Customer::new("Usta"),
            description: String::new(),
            kind,
            purity: Purity::Pure,
            quantity: Decimal::from(2),
            unit: "gr".to_string(),
            currency: Some(Currency::Eur),
            amount: Decimal::from(3),
        };
        let rows = fold(
            Balances::zero(),
            &[make(1, 1, TransactionKind::Sale), make(2, 4, TransactionKind::Purchase)],
        );

        let summary = LedgerSummary::from_rows(&rows).unwrap();
        assert_eq!(summary.row_count, 2);
        assert_eq!(summary.last_date, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
        assert_eq!(summary.last_kind, TransactionKind::Purchase);
        assert!(summary.balances.weight.is_zero());
        assert!(summary.balances.eur.is_zero());
    }
}
