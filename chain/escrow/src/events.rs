//! Events emitted by escrow ledger operations
//!
//! Events are immutable records appended to the ledger's event log, one per
//! successful state transition. Boundary callers read them to observe what
//! an operation did.

use serde::{Deserialize, Serialize};
use types::ids::{AccountId, TxHash};
use types::numeric::Amount;

/// Funds locked under an identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountDeposited {
    pub identifier: TxHash,
    pub owner: AccountId,
    pub amount: Amount,
}

/// Funds released back to the record's owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountWithdrawn {
    pub identifier: TxHash,
    pub owner: AccountId,
    pub amount: Amount,
}

/// Enum wrapper for all ledger events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractEvent {
    AmountDeposited(AmountDeposited),
    AmountWithdrawn(AmountWithdrawn),
}
