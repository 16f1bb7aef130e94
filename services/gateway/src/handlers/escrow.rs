use crate::error::AppError;
use crate::models::{
    DepositRequest, EscrowResponse, IdentifierResponse, RecordResponse, WithdrawRequest,
};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use escrow::ledger::derive_identifier;
use types::ids::TxHash;
use types::numeric::Amount;

pub async fn deposit(
    State(state): State<AppState>,
    Json(req): Json<DepositRequest>,
) -> Result<Json<EscrowResponse>, AppError> {
    let mut ledger = state.lock()?;
    let state = &mut *ledger;
    let event = state
        .escrow
        .deposit(&mut state.token, req.account_id, req.identifier, req.amount)?;

    Ok(Json(EscrowResponse {
        status: "deposited".to_string(),
        event,
    }))
}

pub async fn withdraw(
    State(state): State<AppState>,
    Json(req): Json<WithdrawRequest>,
) -> Result<Json<EscrowResponse>, AppError> {
    let mut ledger = state.lock()?;
    let state = &mut *ledger;
    let event = state.escrow.withdraw(&mut state.token, req.identifier)?;

    Ok(Json(EscrowResponse {
        status: "withdrawn".to_string(),
        event,
    }))
}

pub async fn identifier(
    Path(amount): Path<String>,
) -> Result<Json<IdentifierResponse>, AppError> {
    let amount: Amount = amount
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid amount: {}", amount)))?;

    Ok(Json(IdentifierResponse {
        amount,
        identifier: derive_identifier(amount),
    }))
}

pub async fn record(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<RecordResponse>, AppError> {
    let identifier: TxHash = identifier
        .parse()
        .map_err(|e| AppError::BadRequest(format!("{}", e)))?;

    let ledger = state.lock()?;
    let record = ledger
        .escrow
        .record(&identifier)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No escrow found for identifier {}", identifier)))?;

    Ok(Json(RecordResponse { record }))
}
