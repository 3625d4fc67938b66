//! Calendar date coercion for imported and entered rows.

use super::ValidationError;
use chrono::{NaiveDate, NaiveDateTime};

/// Day-first formats used by the ledger sheet, then ISO.
const SHEET_DATE_FORMATS: [&str; 3] = ["%d.%m.%Y", "%d/%m/%Y", "%Y-%m-%d"];

const SHEET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Coerce a sheet cell to a date. Absent, blank or unparseable cells fall
/// back to `today`.
pub fn coerce_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    raw.and_then(parse_sheet_date).unwrap_or(today)
}

/// Try every accepted sheet format.
pub fn parse_sheet_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    SHEET_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            // spreadsheet exports write date cells as timestamps
            SHEET_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Manual entry accepts ISO `YYYY-MM-DD` only.
pub fn parse_entry_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}
