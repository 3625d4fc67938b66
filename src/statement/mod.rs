//! Plain-text account statement.
//!
//! A statement is a title, a summary of the latest balances, and a listing
//! of the most recent computed rows split into fixed-height pages.

use crate::domain::Customer;
use crate::engine::{ComputedRow, LedgerSummary};
use std::fmt;

/// Separates pages in the rendered text.
pub const PAGE_BREAK: char = '\u{c}';

/// Listing limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementLayout {
    /// Only the last `max_rows` rows are listed.
    pub max_rows: usize,
    /// Lines per page, including the title and summary on page one.
    pub rows_per_page: usize,
}

impl Default for StatementLayout {
    fn default() -> Self {
        Self {
            max_rows: 55,
            rows_per_page: 60,
        }
    }
}

/// A rendered statement, one `Vec` of lines per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub pages: Vec<Vec<String>>,
}

impl Statement {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                writeln!(f, "{}", PAGE_BREAK)?;
            }
            for line in page {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn column_header() -> String {
    format!(
        "{:<10}  {:<10}  {:<6}  {:>10}  {:<4}  {:>12}  {:>12}",
        "Date", "Type", "Purity", "Gram", "Cur.", "Amount", "Weight Bal."
    )
}

fn row_line(row: &ComputedRow) -> String {
    let tx = &row.transaction;
    format!(
        "{:<10}  {:<10}  {:<6}  {:>10}  {:<4}  {:>12}  {:>12}",
        tx.date.format("%Y-%m-%d").to_string(),
        truncate(tx.kind.as_label(), 10),
        truncate(tx.purity.as_label(), 6),
        tx.quantity.to_fixed(3),
        truncate(tx.currency.as_ref().map(|c| c.as_label()).unwrap_or(""), 3),
        row.monetary_contribution.to_fixed(2),
        row.balances.weight.to_fixed(3),
    )
}

#[derive(Debug, Clone, Default)]
pub struct StatementRenderer {
    layout: StatementLayout,
}

impl StatementRenderer {
    pub fn new(layout: StatementLayout) -> Self {
        Self { layout }
    }

    pub fn render(&self, customer: &Customer, rows: &[ComputedRow]) -> Statement {
        let mut head = vec![format!("Statement - {}", customer), String::new()];

        if let Some(summary) = LedgerSummary::from_rows(rows) {
            let b = summary.balances;
            head.push(format!("Weight balance: {} gr", b.weight.to_fixed(3)));
            head.push(format!(
                "USD: {}   EUR: {}   TRY: {}",
                b.usd.to_fixed(2),
                b.eur.to_fixed(2),
                b.try_.to_fixed(2)
            ));
            head.push(String::new());
        }

        let header = column_header();
        head.push(header.clone());
        head.push("-".repeat(header.len()));

        let start = rows.len().saturating_sub(self.layout.max_rows);
        let per_page = self.layout.rows_per_page.max(head.len() + 1);

        let mut pages = Vec::new();
        let mut page = head;
        for row in &rows[start..] {
            if page.len() >= per_page {
                pages.push(std::mem::take(&mut page));
            }
            page.push(row_line(row));
        }
        pages.push(page);

        Statement { pages }
    }
}
