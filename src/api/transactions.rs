use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::domain::{Transaction, TransactionId};
use crate::error::AppError;
use crate::ingest::TransactionDraft;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: i64,
    pub date: String,
    pub customer: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub purity: String,
    pub quantity: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub amount: String,
    /// `debit` or `credit`; absent for unrecognized types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl From<&Transaction> for TransactionDto {
    fn from(tx: &Transaction) -> Self {
        TransactionDto {
            id: tx.id.as_i64(),
            date: tx.date.format("%Y-%m-%d").to_string(),
            customer: tx.customer.as_str().to_string(),
            description: tx.description.clone(),
            kind: tx.kind.as_label().to_string(),
            purity: tx.purity.as_label().to_string(),
            quantity: tx.quantity.to_canonical_string(),
            unit: tx.unit.clone(),
            currency: tx.currency.as_ref().map(|c| c.as_label().to_string()),
            amount: tx.amount.to_canonical_string(),
            direction: tx.kind.direction().map(|d| d.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub id: i64,
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Json(draft): Json<TransactionDraft>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let tx = draft.validate()?;
    let id = state.repo.insert_transaction(&tx).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: id.as_i64() })))
}

pub async fn get_transaction(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TransactionDto>, AppError> {
    let tx = state
        .repo
        .get_transaction(TransactionId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("transaction {}", id)))?;

    Ok(Json(TransactionDto::from(&tx)))
}

pub async fn delete_transaction(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if state.repo.delete_transaction(TransactionId::new(id)).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("transaction {}", id)))
    }
}
