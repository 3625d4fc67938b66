//! Ledger transaction records.

use crate::domain::{Currency, Customer, Decimal, Purity, TransactionId, TransactionKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unit label used when none is given.
pub const DEFAULT_UNIT: &str = "gr";

/// A validated transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub customer: Customer,
    pub description: String,
    pub kind: TransactionKind,
    pub purity: Purity,
    /// Grams, never negative.
    pub quantity: Decimal,
    pub unit: String,
    pub currency: Option<Currency>,
    /// Price per gram for Sale/Purchase, cash sum otherwise.
    pub amount: Decimal,
}

impl NewTransaction {
    /// Attach the identifier assigned by storage.
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            customer: self.customer,
            description: self.description,
            kind: self.kind,
            purity: self.purity,
            quantity: self.quantity,
            unit: self.unit,
            currency: self.currency,
            amount: self.amount,
        }
    }
}

/// A stored ledger transaction. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub customer: Customer,
    pub description: String,
    pub kind: TransactionKind,
    pub purity: Purity,
    pub quantity: Decimal,
    pub unit: String,
    pub currency: Option<Currency>,
    pub amount: Decimal,
}
