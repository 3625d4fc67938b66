use crate::domain::{Decimal, TransactionKind};

/// Debit/credit sign of a contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// +1: increases what the customer owes.
    Debit,
    /// -1: decreases what the customer owes.
    Credit,
}

impl Sign {
    pub fn as_i32(&self) -> i32 {
        match self {
            Sign::Debit => 1,
            Sign::Credit => -1,
        }
    }

    pub fn apply(&self, value: Decimal) -> Decimal {
        value * Decimal::from(self.as_i32())
    }
}

/// Signs for the weight and monetary dimensions of one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signs {
    pub weight: Sign,
    pub monetary: Sign,
}

/// Sale and Payment debit the customer; Purchase, Collection and anything
/// unrecognized credit them. Both dimensions share the table.
pub fn signs(kind: &TransactionKind) -> Signs {
    let sign = match kind {
        TransactionKind::Sale | TransactionKind::Payment => Sign::Debit,
        TransactionKind::Purchase
        | TransactionKind::Collection
        | TransactionKind::Unrecognized(_) => Sign::Credit,
    };
    Signs {
        weight: sign,
        monetary: sign,
    }
}
