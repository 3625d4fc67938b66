//! Boundary validation: everything that turns outside input into
//! `NewTransaction` records.
//!
//! This module provides:
//! - `ValidationError` for malformed fields, raised before a record exists
//! - `TransactionDraft` for manual entry
//! - Date coercion for sheet cells
//! - `SheetImporter` for the CSV export of the ledger sheet

use crate::domain::{Currency, Customer, Decimal, NewTransaction, Purity, TransactionKind, DEFAULT_UNIT};
use serde::Deserialize;
use thiserror::Error;

pub mod dates;
pub mod sheet;

pub use dates::{coerce_date, parse_entry_date, parse_sheet_date};
pub use sheet::{ImportError, SheetImporter};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("quantity must not be negative")]
    NegativeQuantity,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("unsupported transaction type: {0:?}")]
    UnsupportedKind(String),
    #[error("{field} is out of range: {value:?}")]
    OutOfRange { field: &'static str, value: String },
}

/// Largest magnitude accepted for any entered number. Keeps
/// `quantity * amount` and the running sums far inside `Decimal`'s range.
pub const MAX_INPUT_MAGNITUDE: i64 = 1_000_000_000;

/// Parse a numeric field, accepting a comma decimal separator.
pub fn parse_number(field: &'static str, raw: &str) -> Result<Decimal, ValidationError> {
    let value = Decimal::parse_lenient(raw).map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;
    if value.abs() > Decimal::from(MAX_INPUT_MAGNITUDE) {
        return Err(ValidationError::OutOfRange {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

fn check_quantity(quantity: Decimal) -> Result<Decimal, ValidationError> {
    if quantity.is_negative() {
        Err(ValidationError::NegativeQuantity)
    } else {
        Ok(quantity)
    }
}

/// A number as it arrives in JSON: either a literal or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(serde_json::Number),
    Text(String),
}

impl NumericInput {
    fn parse(&self, field: &'static str) -> Result<Decimal, ValidationError> {
        match self {
            NumericInput::Number(n) => parse_number(field, &n.to_string()),
            NumericInput::Text(s) => parse_number(field, s),
        }
    }
}

/// A manually entered transaction, prior to validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub date: String,
    pub customer: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub purity: Option<String>,
    #[serde(default)]
    pub quantity: Option<NumericInput>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Option<NumericInput>,
}

impl TransactionDraft {
    /// Validate the draft. Manual entry only offers the four canonical
    /// types, so anything else is rejected here rather than stored.
    pub fn validate(self) -> Result<NewTransaction, ValidationError> {
        let date = parse_entry_date(&self.date)?;
        let customer =
            Customer::parse(&self.customer).ok_or(ValidationError::MissingField("customer"))?;

        if self.kind.trim().is_empty() {
            return Err(ValidationError::MissingField("type"));
        }
        let kind = TransactionKind::parse(&self.kind);
        if !kind.is_recognized() {
            return Err(ValidationError::UnsupportedKind(self.kind));
        }

        let quantity = match &self.quantity {
            Some(q) => check_quantity(q.parse("quantity")?)?,
            None => Decimal::zero(),
        };
        let amount = match &self.amount {
            Some(a) => a.parse("amount")?,
            None => Decimal::zero(),
        };

        let unit = self
            .unit
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_UNIT.to_string());

        Ok(NewTransaction {
            date,
            customer,
            description: self.description.unwrap_or_default().trim().to_string(),
            kind,
            purity: Purity::parse(self.purity.as_deref().unwrap_or("")),
            quantity,
            unit,
            currency: self.currency.as_deref().and_then(Currency::parse),
            amount,
        })
    }
}
