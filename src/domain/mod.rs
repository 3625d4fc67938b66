//! Domain types for the metal current-account ledger.
//!
//! This module provides:
//! - Exact decimal arithmetic via the Decimal wrapper
//! - Label primitives: TransactionKind, Purity, Currency, Customer
//! - Transaction records as created by ingestion and read back from storage
//! - Ledger ordering key (date, then id)

pub mod decimal;
pub mod ordering;
pub mod primitives;
pub mod transaction;

pub use decimal::Decimal;
pub use ordering::{sort_transactions, TransactionOrderingKey};
pub use primitives::{
    Currency, Customer, Direction, Pricing, Purity, TransactionId, TransactionKind,
};
pub use transaction::{NewTransaction, Transaction, DEFAULT_UNIT};
