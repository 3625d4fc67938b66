use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::transactions::TransactionDto;
use crate::api::AppState;
use crate::domain::ordering::is_ledger_ordered;
use crate::domain::{Customer, Decimal};
use crate::engine::{fold, Balances, ComputedRow, LedgerSummary};
use crate::error::AppError;
use crate::ingest::parse_number;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerQuery {
    pub customer: String,
    pub opening_weight: Option<String>,
    pub opening_usd: Option<String>,
    pub opening_eur: Option<String>,
    pub opening_try: Option<String>,
}

impl LedgerQuery {
    fn opening(&self) -> Result<Balances, AppError> {
        let parse = |field: &'static str, raw: &Option<String>| -> Result<Decimal, AppError> {
            match raw.as_deref() {
                Some(s) => Ok(parse_number(field, s)?),
                None => Ok(Decimal::zero()),
            }
        };
        Ok(Balances {
            weight: parse("openingWeight", &self.opening_weight)?,
            usd: parse("openingUsd", &self.opening_usd)?,
            eur: parse("openingEur", &self.opening_eur)?,
            try_: parse("openingTry", &self.opening_try)?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesDto {
    pub weight: String,
    pub usd: String,
    pub eur: String,
    #[serde(rename = "try")]
    pub try_: String,
}

impl From<Balances> for BalancesDto {
    fn from(b: Balances) -> Self {
        BalancesDto {
            weight: b.weight.to_canonical_string(),
            usd: b.usd.to_canonical_string(),
            eur: b.eur.to_canonical_string(),
            try_: b.try_.to_canonical_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDto {
    #[serde(flatten)]
    pub transaction: TransactionDto,
    pub weight_contribution: String,
    pub monetary_contribution: String,
    pub balances: BalancesDto,
}

impl From<&ComputedRow> for RowDto {
    fn from(row: &ComputedRow) -> Self {
        RowDto {
            transaction: TransactionDto::from(&row.transaction),
            weight_contribution: row.weight_contribution.to_canonical_string(),
            monetary_contribution: row.monetary_contribution.to_canonical_string(),
            balances: BalancesDto::from(row.balances),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDto {
    pub balances: BalancesDto,
    pub last_date: String,
    pub last_type: String,
    pub row_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerResponse {
    pub customer: String,
    pub rows: Vec<RowDto>,
    pub summary: Option<SummaryDto>,
}

pub async fn get_ledger(
    Query(params): Query<LedgerQuery>,
    State(state): State<AppState>,
) -> Result<Json<LedgerResponse>, AppError> {
    let customer = Customer::parse(&params.customer)
        .ok_or_else(|| AppError::BadRequest("customer is required".into()))?;
    let opening = params.opening()?;

    let transactions = state.repo.query_transactions(&customer).await?;
    debug_assert!(is_ledger_ordered(&transactions));
    let rows = fold(opening, &transactions);

    let summary = LedgerSummary::from_rows(&rows).map(|s| SummaryDto {
        balances: BalancesDto::from(s.balances),
        last_date: s.last_date.format("%Y-%m-%d").to_string(),
        last_type: s.last_kind.as_label().to_string(),
        row_count: s.row_count,
    });

    Ok(Json(LedgerResponse {
        customer: customer.as_str().to_string(),
        rows: rows.iter().map(RowDto::from).collect(),
        summary,
    }))
}
