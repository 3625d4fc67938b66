use crate::domain::{Currency, Decimal, Pricing, Transaction};

use super::coefficient::coefficient;
use super::sign::signs;
use super::{Balances, ComputedRow};

/// Running-balance fold over one customer's ordered transactions.
///
/// Callers supply transactions already in ledger order (date, then id);
/// the accumulator never reorders.
#[derive(Debug, Clone, Default)]
pub struct BalanceAccumulator {
    balances: Balances,
    rows: Vec<ComputedRow>,
}

impl BalanceAccumulator {
    pub fn new(opening: Balances) -> Self {
        Self {
            balances: opening,
            rows: Vec::new(),
        }
    }

    /// Apply one transaction and return the row it produced.
    pub fn apply(&mut self, tx: &Transaction) -> &ComputedRow {
        let (weight_contribution, monetary_contribution) = contributions(tx);

        self.balances.weight += weight_contribution;
        if let Some(slot) = self.currency_slot(tx.currency.as_ref()) {
            *slot += monetary_contribution;
        }

        self.rows.push(ComputedRow {
            transaction: tx.clone(),
            weight_contribution,
            monetary_contribution,
            balances: self.balances,
        });
        let idx = self.rows.len() - 1;
        &self.rows[idx]
    }

    /// Balances after the last applied transaction.
    pub fn balances(&self) -> Balances {
        self.balances
    }

    pub fn into_rows(self) -> Vec<ComputedRow> {
        self.rows
    }

    fn currency_slot(&mut self, currency: Option<&Currency>) -> Option<&mut Decimal> {
        match currency? {
            Currency::Usd => Some(&mut self.balances.usd),
            Currency::Eur => Some(&mut self.balances.eur),
            Currency::Try => Some(&mut self.balances.try_),
            Currency::Unrecognized(_) => None,
        }
    }
}

/// Signed (weight, monetary) contributions of a single transaction.
pub fn contributions(tx: &Transaction) -> (Decimal, Decimal) {
    let s = signs(&tx.kind);
    let weight = s.weight.apply(tx.quantity * coefficient(&tx.purity));
    let base = match tx.kind.pricing() {
        Pricing::PerGram => tx.quantity * tx.amount,
        Pricing::Flat => tx.amount,
    };
    (weight, s.monetary.apply(base))
}

/// Fold an ordered sequence into computed rows, starting from `opening`.
pub fn fold(opening: Balances, transactions: &[Transaction]) -> Vec<ComputedRow> {
    let mut acc = BalanceAccumulator::new(opening);
    for tx in transactions {
        acc.apply(tx);
    }
    acc.into_rows()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Customer, Purity, TransactionId, TransactionKind};
    use chrono::NaiveDate;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn tx(id: i64, kind: &str, purity: &str, qty: &str, currency: &str, amount: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            customer: Customer::new("Kuyumcu"),
            description: String::new(),
            kind: TransactionKind::parse(kind),
            purity: Purity::parse(purity),
            quantity: d(qty),
            unit: "gr".to_string(),
            currency: Currency::parse(currency),
            amount: d(amount),
        }
    }

    #[test]
    fn test_empty_sequence_yields_no_rows() {
        assert!(fold(Balances::zero(), &[]).is_empty());
    }

    #[test]
    fn test_sale_prices_per_gram() {
        let (w, m) = contributions(&tx(1, "Sale", "Pure", "10", "USD", "5"));
        assert_eq!(w, d("10"));
        assert_eq!(m, d("50"));
    }

    #[test]
    fn test_collection_is_flat_and_negative() {
        let (w, m) = contributions(&tx(1, "Collection", "", "3", "TRY", "200"));
        assert!(w.is_zero());
        assert_eq!(m, d("-200"));
    }

    #[test]
    fn test_missing_currency_only_moves_weight() {
        let rows = fold(Balances::zero(), &[tx(1, "Sale", "935", "2", "", "100")]);
        let b = rows[0].balances;
        assert_eq!(b.weight, d("1.87"));
        assert!(b.usd.is_zero() && b.eur.is_zero() && b.try_.is_zero());
        assert_eq!(rows[0].monetary_contribution, d("200"));
    }

    #[test]
    fn test_accumulator_tracks_balances() {
        let mut acc = BalanceAccumulator::new(Balances::zero());
        let row = acc.apply(&tx(1, "Sale", "Pure", "10", "USD", "5"));
        assert_eq!(row.balances.usd, d("50"));
        acc.apply(&tx(2, "Payment", "", "0", "usd", "25"));
        assert_eq!(acc.balances().usd, d("75"));
        assert_eq!(acc.balances().weight, d("10"));
        assert_eq!(acc.into_rows().len(), 2);
    }
}
