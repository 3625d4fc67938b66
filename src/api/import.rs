use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::api::AppState;
use crate::error::AppError;
use crate::ingest::SheetImporter;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub imported: usize,
}

/// Import the CSV export of the ledger sheet. Nothing is stored unless
/// every row validates.
pub async fn import_sheet(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportResponse>, AppError> {
    let today = chrono::Local::now().date_naive();
    let rows = SheetImporter::new(today)
        .with_delimiter(state.config.import_delimiter)
        .import_str(&body)?;

    if rows.is_empty() {
        info!("Sheet contained no importable rows");
        return Ok(Json(ImportResponse { imported: 0 }));
    }

    let imported = state.repo.insert_transactions_batch(&rows).await?;
    Ok(Json(ImportResponse { imported }))
}
