use crate::domain::{Decimal, Purity};
use rust_decimal::Decimal as RustDecimal;

/// Fine-metal fraction for a purity. Unrecognized or empty purity yields
/// zero, which silently zeroes the row's weight contribution.
pub fn coefficient(purity: &Purity) -> Decimal {
    match purity {
        Purity::Pure => Decimal::one(),
        Purity::Fine925 => Decimal::new(RustDecimal::new(925, 3)),
        Purity::Fine935 => Decimal::new(RustDecimal::new(935, 3)),
        Purity::Unrecognized(_) => Decimal::zero(),
    }
}

/// Resolve a raw purity label directly.
pub fn resolve_label(label: &str) -> Decimal {
    coefficient(&Purity::parse(label))
}
