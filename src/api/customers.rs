use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomersResponse {
    pub customers: Vec<String>,
}

pub async fn get_customers(
    State(state): State<AppState>,
) -> Result<Json<CustomersResponse>, AppError> {
    let customers = state
        .repo
        .list_customers()
        .await?
        .into_iter()
        .map(|c| c.as_str().to_string())
        .collect();

    Ok(Json(CustomersResponse { customers }))
}
