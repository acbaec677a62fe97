use axum::{
    Json,
    extract::{Path, State},
};
use bigdecimal::BigDecimal;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    accounts::{db_types::CustomerTier, operations::get_account},
    api::{error::ApiError, response::ApiResponse, validation::validate_account_id},
    calculations::{fees::monthly_fee, rewards::monthly_reward},
    utils::{app_config::AppConfig, db::get_conn},
};

#[derive(Debug, Deserialize)]
pub struct CalculationPayload {
    pub account_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeeCalculationResponse {
    pub account_id: i32,
    pub tier: CustomerTier,
    pub balance: Option<BigDecimal>,
    pub calculated_fee: BigDecimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RewardCalculationResponse {
    pub account_id: i32,
    pub balance: Option<BigDecimal>,
    pub reward_rate: BigDecimal,
    pub calculated_reward: BigDecimal,
}

/// POST /fees/{account_id} - Calculate the monthly fee for an account
pub async fn calculate_account_fees(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<FeeCalculationResponse>>), ApiError> {
    let account_id = validate_account_id(&id)?;
    fees_for_account(&app_config, account_id).await
}

/// POST /fees - Same calculation with a body-supplied account_id
pub async fn calculate_fees(
    State(app_config): State<AppConfig>,
    payload: Option<Json<CalculationPayload>>,
) -> Result<(StatusCode, Json<ApiResponse<FeeCalculationResponse>>), ApiError> {
    let account_id = payload
        .and_then(|Json(body)| body.account_id)
        .ok_or_else(|| ApiError::bad_request("Missing account_id"))?;

    fees_for_account(&app_config, account_id).await
}

/// POST /rewards/{account_id} - Calculate the monthly reward for an account
pub async fn calculate_account_rewards(
    State(app_config): State<AppConfig>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<RewardCalculationResponse>>), ApiError> {
    let account_id = validate_account_id(&id)?;
    rewards_for_account(&app_config, account_id).await
}

/// POST /rewards - Same calculation with a body-supplied account_id
pub async fn calculate_rewards(
    State(app_config): State<AppConfig>,
    payload: Option<Json<CalculationPayload>>,
) -> Result<(StatusCode, Json<ApiResponse<RewardCalculationResponse>>), ApiError> {
    let account_id = payload
        .and_then(|Json(body)| body.account_id)
        .ok_or_else(|| ApiError::bad_request("Missing account_id"))?;

    rewards_for_account(&app_config, account_id).await
}

// Calculated values are returned, never written back to the store.
async fn fees_for_account(
    app_config: &AppConfig,
    account_id: i32,
) -> Result<(StatusCode, Json<ApiResponse<FeeCalculationResponse>>), ApiError> {
    let mut conn = get_conn(&app_config.pool)
        .map_err(|_| ApiError::store_unavailable("Failed to acquire store connection"))?;

    let account = get_account(&mut conn, account_id)
        .await
        .map_err(|e| {
            tracing::error!("fetching account {} failed: {}", account_id, e);
            ApiError::store_unavailable(format!("Store error: {}", e))
        })?
        .ok_or_else(|| ApiError::not_found("Account"))?;

    let calculated_fee = monthly_fee(&account.tier, account.balance.as_ref());

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(FeeCalculationResponse {
            account_id: account.account_id,
            tier: account.tier,
            balance: account.balance,
            calculated_fee,
        })),
    ))
}

async fn rewards_for_account(
    app_config: &AppConfig,
    account_id: i32,
) -> Result<(StatusCode, Json<ApiResponse<RewardCalculationResponse>>), ApiError> {
    let mut conn = get_conn(&app_config.pool)
        .map_err(|_| ApiError::store_unavailable("Failed to acquire store connection"))?;

    let account = get_account(&mut conn, account_id)
        .await
        .map_err(|e| {
            tracing::error!("fetching account {} failed: {}", account_id, e);
            ApiError::store_unavailable(format!("Store error: {}", e))
        })?
        .ok_or_else(|| ApiError::not_found("Account"))?;

    let reward = monthly_reward(account.balance.as_ref());

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(RewardCalculationResponse {
            account_id: account.account_id,
            balance: account.balance,
            reward_rate: reward.reward_rate,
            calculated_reward: reward.reward_amount,
        })),
    ))
}
