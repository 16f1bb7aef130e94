use escrow::events::ContractEvent;
use escrow::ledger::EscrowRecord;
use serde::{Deserialize, Serialize};
use types::ids::{AccountId, TxHash};
use types::numeric::Amount;

#[derive(Debug, Clone, Deserialize)]
pub struct DepositRequest {
    pub account_id: AccountId,
    pub identifier: TxHash,
    pub amount: Amount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawRequest {
    pub identifier: TxHash,
}

#[derive(Debug, Clone, Serialize)]
pub struct EscrowResponse {
    pub status: String,
    pub event: ContractEvent,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdentifierResponse {
    pub amount: Amount,
    pub identifier: TxHash,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    pub record: EscrowRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceResponse {
    pub account_id: AccountId,
    pub balance: Amount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MintRequest {
    pub account_id: AccountId,
    pub amount: Amount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: Amount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApproveRequest {
    pub account_id: AccountId,
    pub amount: Amount,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApproveResponse {
    pub account_id: AccountId,
    pub spender: AccountId,
    pub allowance: Amount,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
}
