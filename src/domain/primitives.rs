//! Domain primitives: TransactionId, Customer, TransactionKind, Purity, Currency.
//!
//! Label parsing is case-insensitive and trimmed. Labels outside the closed
//! sets are kept verbatim in an `Unrecognized` arm so they survive storage
//! and display; the engine decides how such rows contribute.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned transaction identifier (SQLite rowid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub i64);

impl TransactionId {
    pub fn new(id: i64) -> Self {
        TransactionId(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer identifier, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Customer(String);

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Customer(name.into().trim().to_string())
    }

    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Customer(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ledger transaction type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    /// Metal sold to the customer.
    Sale,
    /// Metal bought from the customer.
    Purchase,
    /// Cash paid out to the customer.
    Payment,
    /// Cash collected from the customer.
    Collection,
    /// Any other label, kept as entered.
    Unrecognized(String),
}

impl TransactionKind {
    /// Parse a type label. Accepts the English names and the Turkish labels
    /// used by the ledger spreadsheet, with or without diacritics.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "sale" | "satış" | "satis" => TransactionKind::Sale,
            "purchase" | "alış" | "alis" => TransactionKind::Purchase,
            "payment" | "ödeme" | "odeme" => TransactionKind::Payment,
            "collection" | "tahsilat" => TransactionKind::Collection,
            _ => TransactionKind::Unrecognized(trimmed.to_string()),
        }
    }

    pub fn as_label(&self) -> &str {
        match self {
            TransactionKind::Sale => "Sale",
            TransactionKind::Purchase => "Purchase",
            TransactionKind::Payment => "Payment",
            TransactionKind::Collection => "Collection",
            TransactionKind::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TransactionKind::Unrecognized(_))
    }

    /// How the `amount` field is interpreted for this kind.
    pub fn pricing(&self) -> Pricing {
        match self {
            TransactionKind::Sale | TransactionKind::Purchase => Pricing::PerGram,
            TransactionKind::Payment
            | TransactionKind::Collection
            | TransactionKind::Unrecognized(_) => Pricing::Flat,
        }
    }

    /// Debit/credit tag for list views. Unrecognized kinds are untagged.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            TransactionKind::Sale | TransactionKind::Payment => Some(Direction::Debit),
            TransactionKind::Purchase | TransactionKind::Collection => Some(Direction::Credit),
            TransactionKind::Unrecognized(_) => None,
        }
    }
}

impl From<String> for TransactionKind {
    fn from(raw: String) -> Self {
        TransactionKind::parse(&raw)
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        kind.as_label().to_string()
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Interpretation of a transaction's `amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pricing {
    /// `amount` is a price per gram; the monetary base is `quantity * amount`.
    PerGram,
    /// `amount` is a flat cash sum.
    Flat,
}

/// Whether a transaction increases (debit) or decreases (credit) what the
/// customer owes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Debit,
    Credit,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Debit => write!(f, "debit"),
            Direction::Credit => write!(f, "credit"),
        }
    }
}

/// Metal fineness label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Purity {
    /// Pure metal ("Has").
    Pure,
    /// 925 fineness.
    Fine925,
    /// 935 fineness.
    Fine935,
    /// Empty or unknown label.
    Unrecognized(String),
}

impl Purity {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "pure" | "has" => Purity::Pure,
            "925" | "0.925" => Purity::Fine925,
            "935" | "0.935" => Purity::Fine935,
            _ => Purity::Unrecognized(trimmed.to_string()),
        }
    }

    pub fn as_label(&self) -> &str {
        match self {
            Purity::Pure => "Pure",
            Purity::Fine925 => "925",
            Purity::Fine935 => "935",
            Purity::Unrecognized(raw) => raw,
        }
    }
}

impl Default for Purity {
    fn default() -> Self {
        Purity::Unrecognized(String::new())
    }
}

impl From<String> for Purity {
    fn from(raw: String) -> Self {
        Purity::parse(&raw)
    }
}

impl From<Purity> for String {
    fn from(purity: Purity) -> Self {
        purity.as_label().to_string()
    }
}

impl fmt::Display for Purity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Settlement currency of a row's monetary contribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    Usd,
    Eur,
    /// Turkish lira; also entered as "TL".
    Try,
    Unrecognized(String),
}

impl Currency {
    /// Parse a currency label. Blank input means "no currency".
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_uppercase().as_str() {
            "USD" => Currency::Usd,
            "EUR" => Currency::Eur,
            "TRY" | "TL" => Currency::Try,
            _ => Currency::Unrecognized(trimmed.to_string()),
        })
    }

    pub fn as_label(&self) -> &str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Try => "TRY",
            Currency::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Currency {
    fn from(raw: String) -> Self {
        Currency::parse(&raw).unwrap_or(Currency::Unrecognized(raw))
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.as_label().to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}
