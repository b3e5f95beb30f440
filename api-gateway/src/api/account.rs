//! Account API handlers
//!
//! Handles endpoints related to account management:
//! - Create account
//! - Get account details
//! - Deposit funds

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use common::decimal::Amount;
use common::model::account::{Account, AccountKind};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::api::response::ApiResponse;
use crate::error::ApiError;
use crate::AppState;

/// Create account request
///
/// Missing fields fall back to their defaults, so an omitted account number
/// arrives as 0 and is rejected.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateAccountRequest {
    /// Account number
    pub account_number: i64,
    /// Account holder or description
    pub name: String,
    /// Opening balance
    pub balance: Amount,
    /// Account kind
    pub kind: AccountKind,
}

impl From<CreateAccountRequest> for Account {
    fn from(request: CreateAccountRequest) -> Self {
        Self {
            account_number: request.account_number,
            name: request.name,
            balance: request.balance,
            kind: request.kind,
        }
    }
}

/// Create a new account
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account successfully created", body = Account),
        (status = 400, description = "Invalid account details"),
        (status = 409, description = "Account number already in use")
    ),
    tag = "account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<ApiResponse<Account>, ApiError> {
    let account = state
        .controller
        .create_new_account(request.into())?
        .ok_or_else(|| ApiError::BadRequest("Invalid account details".to_string()))?;

    info!("Created account {}", account.account_number);
    Ok(ApiResponse::new(account))
}

/// Get an account by number
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{account_number}",
    params(
        ("account_number" = i64, Path, description = "Account number")
    ),
    responses(
        (status = 200, description = "Account details retrieved successfully", body = Account),
        (status = 404, description = "Account not found")
    ),
    tag = "account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(account_number): Path<i64>,
) -> Result<ApiResponse<Account>, ApiError> {
    let account = state
        .controller
        .get_account_details(account_number)
        .ok_or_else(|| ApiError::NotFound(format!("Account not found: {}", account_number)))?;

    Ok(ApiResponse::new(account))
}

/// Deposit request
#[derive(Debug, Deserialize, ToSchema)]
pub struct DepositRequest {
    /// Amount
    pub amount: Amount,
}

/// Balance after a deposit
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepositResponse {
    /// Account number
    pub account_number: i64,
    /// Updated balance
    pub balance: Amount,
}

/// Deposit funds into an account
#[utoipa::path(
    post,
    path = "/api/v1/accounts/{account_number}/deposit",
    params(
        ("account_number" = i64, Path, description = "Account number")
    ),
    request_body = DepositRequest,
    responses(
        (status = 200, description = "Funds deposited successfully", body = DepositResponse),
        (status = 400, description = "Invalid account number or deposit amount"),
        (status = 404, description = "Account not found")
    ),
    tag = "account"
)]
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Path(account_number): Path<i64>,
    Json(request): Json<DepositRequest>,
) -> Result<ApiResponse<DepositResponse>, ApiError> {
    let balance = state.controller.deposit(account_number, request.amount)?;

    Ok(ApiResponse::new(DepositResponse {
        account_number,
        balance,
    }))
}
