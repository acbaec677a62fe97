use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;

use crate::{
    accounts::{
        db_types::{AccountDetail, AccountSummary},
        operations::{get_account, list_accounts, update_balance},
    },
    api::{
        error::ApiError,
        response::ApiResponse,
        validation::{validate_account_id, validate_balance},
    },
    utils::{app_config::AppConfig, db::get_conn},
};

/// GET /accounts - List every account with its owner and tier
pub async fn get_accounts(
    State(app_config): State<AppConfig>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<AccountSummary>>>), ApiError> {
    let mut conn = get_conn(&app_config.pool)
        .map_err(|_| ApiError::store_unavailable("Failed to acquire store connection"))?;

    let accounts = list_accounts(&mut conn).await.map_err(|e| {
        tracing::error!("listing accounts failed: {}", e);
        ApiError::store_unavailable(format!("Store error: {}", e))
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::success(accounts))))
}

/// GET /accounts/{id} - Get one account with customer details
pub async fn get_account_by_id(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<AccountDetail>>), ApiError> {
    let account_id = validate_account_id(&id)?;

    let mut conn = get_conn(&app_config.pool)
        .map_err(|_| ApiError::store_unavailable("Failed to acquire store connection"))?;

    let account = get_account(&mut conn, account_id)
        .await
        .map_err(|e| {
            tracing::error!("fetching account {} failed: {}", account_id, e);
            ApiError::store_unavailable(format!("Store error: {}", e))
        })?
        .ok_or_else(|| ApiError::not_found("Account"))?;

    Ok((StatusCode::OK, Json(ApiResponse::success(account))))
}

#[derive(Debug, Deserialize)]
pub struct UpdateBalancePayload {
    pub balance: Option<BigDecimal>,
}

/// PUT /accounts/{id} - Replace the account balance
///
/// The new balance must be present and non-negative; the store is never
/// touched when validation fails.
pub async fn update_account_balance(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
    payload: Option<Json<UpdateBalancePayload>>,
) -> Result<(StatusCode, Json<ApiResponse<AccountDetail>>), ApiError> {
    let account_id = validate_account_id(&id)?;

    let new_balance = payload
        .and_then(|Json(body)| body.balance)
        .ok_or_else(|| ApiError::bad_request("Missing balance"))?;

    validate_balance(&new_balance)?;

    let mut conn = get_conn(&app_config.pool)
        .map_err(|_| ApiError::store_unavailable("Failed to acquire store connection"))?;

    let updated = update_balance(&mut conn, account_id, new_balance)
        .await
        .map_err(|e| {
            tracing::error!("updating balance for account {} failed: {}", account_id, e);
            ApiError::store_unavailable(format!("Store error: {}", e))
        })?
        .ok_or_else(|| ApiError::not_found("Account"))?;

    tracing::info!("balance updated for account {}", account_id);

    Ok((StatusCode::OK, Json(ApiResponse::success(updated))))
}
