//! Import of the ledger sheet from its CSV export.
//!
//! The first record is the header. Columns are located by name, in English
//! or with the sheet's original Turkish headings, so column order does not
//! matter. Rows without a customer are skipped.

use super::{check_quantity, coerce_date, parse_number, ValidationError};
use crate::domain::{Currency, Customer, Decimal, NewTransaction, Purity, TransactionKind, DEFAULT_UNIT};
use chrono::NaiveDate;
use std::io::Read;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("sheet has no header row")]
    MissingHeader,
    #[error("sheet is missing the required {0} column")]
    MissingColumn(&'static str),
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {line}: {source}")]
    InvalidRow {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

impl ImportError {
    /// True when the source itself is unusable, as opposed to one bad row.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, ImportError::InvalidRow { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Date,
    Customer,
    Description,
    Kind,
    Purity,
    Quantity,
    Unit,
    Currency,
    Amount,
}

fn classify_header(raw: &str) -> Option<Column> {
    // lowercase of a dotted capital I leaves a combining dot behind
    let h = raw.trim().to_lowercase().replace('\u{307}', "");
    let column = match h.as_str() {
        "date" | "tarih" => Column::Date,
        "customer" | "müşteri" | "musteri" => Column::Customer,
        "description" | "açıklama" | "aciklama" => Column::Description,
        "type" | "işlem türü" | "islem turu" | "islem_turu" => Column::Kind,
        "purity" | "ayar" => Column::Purity,
        "quantity" | "gram" => Column::Quantity,
        "unit" | "birim" => Column::Unit,
        "currency" | "işçilik döviz" | "iscilik doviz" | "iscilik_doviz" => Column::Currency,
        "amount" | "birim_fiyat_veya_nakit" => Column::Amount,
        other if other.starts_with("işçilik birim fiyat") || other.starts_with("birim fiyat") => {
            Column::Amount
        }
        _ => return None,
    };
    Some(column)
}

#[derive(Debug)]
struct ColumnMap {
    date: Option<usize>,
    customer: usize,
    description: Option<usize>,
    kind: usize,
    purity: Option<usize>,
    quantity: Option<usize>,
    unit: Option<usize>,
    currency: Option<usize>,
    amount: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &csv::StringRecord) -> Result<Self, ImportError> {
        let mut found: Vec<(Column, usize)> = Vec::new();
        for (idx, name) in header.iter().enumerate() {
            match classify_header(name) {
                // first occurrence wins
                Some(col) if !found.iter().any(|(c, _)| *c == col) => found.push((col, idx)),
                Some(_) => {}
                None => debug!(header = %name, "Ignoring unknown sheet column"),
            }
        }
        let find = |col: Column| found.iter().find(|(c, _)| *c == col).map(|(_, i)| *i);

        Ok(ColumnMap {
            date: find(Column::Date),
            customer: find(Column::Customer).ok_or(ImportError::MissingColumn("customer"))?,
            description: find(Column::Description),
            kind: find(Column::Kind).ok_or(ImportError::MissingColumn("type"))?,
            purity: find(Column::Purity),
            quantity: find(Column::Quantity),
            unit: find(Column::Unit),
            currency: find(Column::Currency),
            amount: find(Column::Amount),
        })
    }
}

fn cell(record: &csv::StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).map(str::trim).unwrap_or("")
}

/// Blank numeric cells count as zero.
fn cell_number(
    record: &csv::StringRecord,
    idx: Option<usize>,
    field: &'static str,
) -> Result<Decimal, ValidationError> {
    let raw = cell(record, idx);
    if raw.is_empty() {
        Ok(Decimal::zero())
    } else {
        parse_number(field, raw)
    }
}

/// Reads the ledger sheet into validated records. The whole batch fails on
/// the first bad row so nothing is partially imported.
#[derive(Debug, Clone)]
pub struct SheetImporter {
    today: NaiveDate,
    delimiter: u8,
}

impl SheetImporter {
    /// `today` is used for rows whose date is blank or unparseable.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn import_str(&self, content: &str) -> Result<Vec<NewTransaction>, ImportError> {
        self.import_reader(content.as_bytes())
    }

    pub fn import_reader<R: Read>(&self, reader: R) -> Result<Vec<NewTransaction>, ImportError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(reader);
        let mut records = rdr.records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Err(ImportError::MissingHeader),
        };
        if header.iter().all(|h| h.trim().is_empty()) {
            return Err(ImportError::MissingHeader);
        }
        let columns = ColumnMap::from_header(&header)?;

        let mut out = Vec::new();
        let mut skipped = 0usize;
        for (idx, record) in records.enumerate() {
            let record = record?;
            let line = idx + 2;

            let Some(customer) = Customer::parse(cell(&record, Some(columns.customer))) else {
                skipped += 1;
                continue;
            };

            let tx = self
                .build_row(&record, &columns, customer)
                .map_err(|source| ImportError::InvalidRow { line, source })?;
            warn_on_lenient_labels(line, &tx);
            out.push(tx);
        }

        info!(rows = out.len(), skipped, "Parsed ledger sheet");
        Ok(out)
    }

    fn build_row(
        &self,
        record: &csv::StringRecord,
        columns: &ColumnMap,
        customer: Customer,
    ) -> Result<NewTransaction, ValidationError> {
        let kind_raw = cell(record, Some(columns.kind));
        if kind_raw.is_empty() {
            return Err(ValidationError::MissingField("type"));
        }

        let date_raw = cell(record, columns.date);
        let date = coerce_date(Some(date_raw), self.today);
        let quantity = check_quantity(cell_number(record, columns.quantity, "quantity")?)?;
        let amount = cell_number(record, columns.amount, "amount")?;
        let unit = match cell(record, columns.unit) {
            "" => DEFAULT_UNIT.to_string(),
            u => u.to_string(),
        };

        Ok(NewTransaction {
            date,
            customer,
            description: cell(record, columns.description).to_string(),
            kind: TransactionKind::parse(kind_raw),
            purity: Purity::parse(cell(record, columns.purity)),
            quantity,
            unit,
            currency: Currency::parse(cell(record, columns.currency)),
            amount,
        })
    }
}

fn warn_on_lenient_labels(line: usize, tx: &NewTransaction) {
    if !tx.kind.is_recognized() {
        warn!(line, kind = %tx.kind, "Unrecognized transaction type, treated as a credit");
    }
    if let Purity::Unrecognized(raw) = &tx.purity {
        if !raw.is_empty() {
            warn!(line, purity = %raw, "Unrecognized purity, weight contribution is zero");
        }
    }
    if let Some(Currency::Unrecognized(raw)) = &tx.currency {
        warn!(line, currency = %raw, "Unrecognized currency, no balance is updated");
    }
}
