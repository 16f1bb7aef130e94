use crate::error::AppError;
use crate::models::{
    ApproveRequest, ApproveResponse, BalanceResponse, MintRequest, StatusResponse, TransferRequest,
};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use types::ids::AccountId;

pub async fn balance(
    State(state): State<AppState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<BalanceResponse>, AppError> {
    let ledger = state.lock()?;

    Ok(Json(BalanceResponse {
        account_id,
        balance: ledger.token.token().balance_of(&account_id),
    }))
}

pub async fn mint(
    State(state): State<AppState>,
    Json(req): Json<MintRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let mut ledger = state.lock()?;
    ledger.token.token_mut().mint(req.account_id, req.amount)?;

    Ok(Json(StatusResponse {
        status: "minted".to_string(),
    }))
}

pub async fn transfer(
    State(state): State<AppState>,
    Json(req): Json<TransferRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let mut ledger = state.lock()?;
    ledger
        .token
        .token_mut()
        .transfer(&req.from, &req.to, req.amount)?;

    Ok(Json(StatusResponse {
        status: "transferred".to_string(),
    }))
}

/// Grant the escrow custody account an allowance over the caller's funds.
/// The custody account is always the spender.
pub async fn approve(
    State(state): State<AppState>,
    Json(req): Json<ApproveRequest>,
) -> Result<Json<ApproveResponse>, AppError> {
    let mut ledger = state.lock()?;
    let spender = *ledger.token.custody();
    ledger
        .token
        .token_mut()
        .approve(req.account_id, spender, req.amount);

    Ok(Json(ApproveResponse {
        account_id: req.account_id,
        spender,
        allowance: ledger.token.token().allowance(&req.account_id, &spender),
    }))
}
