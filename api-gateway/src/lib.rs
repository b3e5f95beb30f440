//! HTTP gateway for the bank ledger

pub mod api;
pub mod config;
pub mod controller;
pub mod error;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::account::{create_account, deposit, get_account};
use crate::controller::BankController;

/// App state shared across handlers
pub struct AppState {
    /// Bank controller
    pub controller: BankController,
}

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        api::account::create_account,
        api::account::get_account,
        api::account::deposit,
    ),
    components(
        schemas(
            api::account::CreateAccountRequest,
            api::account::DepositRequest,
            api::account::DepositResponse,
            common::model::account::Account,
            common::model::account::AccountKind,
        )
    ),
    tags(
        (name = "account", description = "Account management endpoints")
    ),
    info(
        title = "Bank Ledger API",
        version = "1.0.0",
        description = "API for creating bank accounts, reading them back and depositing funds"
    )
)]
pub struct ApiDoc;

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/accounts", post(create_account))
        .route("/accounts/:account_number", get(get_account))
        .route("/accounts/:account_number/deposit", post(deposit));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
