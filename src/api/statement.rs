use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::api::AppState;
use crate::domain::Customer;
use crate::engine::{fold, Balances};
use crate::error::AppError;
use crate::statement::StatementRenderer;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementQuery {
    pub customer: String,
}

pub async fn get_statement(
    Query(params): Query<StatementQuery>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let customer = Customer::parse(&params.customer)
        .ok_or_else(|| AppError::BadRequest("customer is required".into()))?;

    let transactions = state.repo.query_transactions(&customer).await?;
    if transactions.is_empty() {
        return Err(AppError::NotFound(format!("no transactions for {}", customer)));
    }

    let rows = fold(Balances::zero(), &transactions);
    let text = StatementRenderer::new(state.config.statement_layout)
        .render(&customer, &rows)
        .to_string();

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}
