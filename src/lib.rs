pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod statement;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{
    Currency, Customer, Decimal, Direction, NewTransaction, Purity, Transaction, TransactionId,
    TransactionKind,
};
pub use engine::{fold, BalanceAccumulator, Balances, ComputedRow, LedgerSummary};
pub use error::AppError;
