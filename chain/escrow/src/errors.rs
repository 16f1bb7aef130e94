//! Escrow-specific error types
//!
//! One variant per operation precondition, plus token-ledger failures
//! passed through unmodified.

use thiserror::Error;
use types::ids::TxHash;
use types::numeric::Amount;

/// Errors surfaced by the token ledger's transfer primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: Amount, available: Amount },

    #[error("Insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance { required: Amount, available: Amount },

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,
}

/// Escrow ledger errors.
///
/// Every precondition is checked before any state mutation or token
/// movement, so a failed operation leaves the ledger exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscrowError {
    #[error("Transaction hash cannot be empty")]
    EmptyIdentifier,

    #[error("Escrow amount must be positive")]
    ZeroAmount,

    #[error("Identifier conflict: {identifier} already holds a live escrow")]
    IdentifierConflict { identifier: TxHash },

    #[error("No escrow found for identifier {identifier}")]
    RecordNotFound { identifier: TxHash },

    #[error(transparent)]
    Token(#[from] TokenError),
}
