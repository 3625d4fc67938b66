pub mod customers;
pub mod health;
pub mod import;
pub mod ledger;
pub mod statement;
pub mod transactions;

use crate::config::Config;
use crate::db::Repository;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self { repo, config }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/customers", get(customers::get_customers))
        .route("/v1/ledger", get(ledger::get_ledger))
        .route("/v1/transactions", post(transactions::create_transaction))
        .route(
            "/v1/transactions/:id",
            get(transactions::get_transaction).delete(transactions::delete_transaction),
        )
        .route("/v1/import", post(import::import_sheet))
        .route("/v1/statement", get(statement::get_statement))
        .layer(cors)
        .with_state(state)
}
