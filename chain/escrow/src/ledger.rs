//! Escrow Ledger — identifier-keyed custody records and their state machine
//!
//! A record is created only by a successful deposit (atomic with the token
//! pull) and destroyed only by a successful withdrawal (atomic with the
//! token release). An identifier transitions NONE → LIVE → NONE; depositing
//! against a live identifier and withdrawing an unknown one are both
//! rejected. A withdrawn identifier may be reused.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use types::ids::{AccountId, TxHash};
use types::numeric::Amount;

use crate::errors::EscrowError;
use crate::events::{AmountDeposited, AmountWithdrawn, ContractEvent};
use crate::token::TokenLedger;

/// A single live escrow: funds held in custody on behalf of `owner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowRecord {
    pub identifier: TxHash,
    pub owner: AccountId,
    pub amount: Amount,
}

/// Escrow ledger managing identifier-keyed custody records.
///
/// The ledger only tracks which identifier holds how much for whom; token
/// movement goes through the injected [`TokenLedger`] collaborator passed
/// into each operation. `&mut self` operations run to completion with no
/// interleaving, so every read-check-write sequence is indivisible.
#[derive(Debug, Default)]
pub struct EscrowLedger {
    /// Live records: identifier -> record
    records: HashMap<TxHash, EscrowRecord>,
    /// Emitted events log (append-only)
    events: Vec<ContractEvent>,
}

impl EscrowLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    // ───────────────────────── Deposit ─────────────────────────

    /// Lock `amount` units from `caller` under `identifier`.
    ///
    /// The caller must have pre-granted the custody account an allowance of
    /// at least `amount`. Preconditions are checked before any token
    /// movement, and the record is only written after the pull succeeds, so
    /// a failed deposit leaves no trace.
    ///
    /// Emits `AmountDeposited`.
    pub fn deposit<T: TokenLedger>(
        &mut self,
        token: &mut T,
        caller: AccountId,
        identifier: TxHash,
        amount: Amount,
    ) -> Result<ContractEvent, EscrowError> {
        if identifier.is_zero() {
            return Err(EscrowError::EmptyIdentifier);
        }
        if amount == 0 {
            return Err(EscrowError::ZeroAmount);
        }
        if self.records.contains_key(&identifier) {
            return Err(EscrowError::IdentifierConflict { identifier });
        }

        token.pull(&caller, amount)?;

        self.records.insert(
            identifier,
            EscrowRecord {
                identifier,
                owner: caller,
                amount,
            },
        );

        let event = ContractEvent::AmountDeposited(AmountDeposited {
            identifier,
            owner: caller,
            amount,
        });
        self.events.push(event.clone());
        Ok(event)
    }

    // ───────────────────────── Withdraw ─────────────────────────

    /// Release the escrow held under `identifier` and delete the record.
    ///
    /// Any caller presenting a live identifier may trigger release; funds
    /// always return to the record's stored owner, never to the caller.
    /// The record is deleted only after the release succeeds — if the token
    /// release fails, the record stays intact.
    ///
    /// Emits `AmountWithdrawn`.
    pub fn withdraw<T: TokenLedger>(
        &mut self,
        token: &mut T,
        identifier: TxHash,
    ) -> Result<ContractEvent, EscrowError> {
        if identifier.is_zero() {
            return Err(EscrowError::EmptyIdentifier);
        }
        let record = self
            .records
            .get(&identifier)
            .ok_or(EscrowError::RecordNotFound { identifier })?;
        let (owner, amount) = (record.owner, record.amount);

        token.release(&owner, amount)?;

        self.records.remove(&identifier);

        let event = ContractEvent::AmountWithdrawn(AmountWithdrawn {
            identifier,
            owner,
            amount,
        });
        self.events.push(event.clone());
        Ok(event)
    }

    // ───────────────────────── Queries ─────────────────────────

    /// Look up the live record for an identifier.
    pub fn record(&self, identifier: &TxHash) -> Option<&EscrowRecord> {
        self.records.get(identifier)
    }

    /// Whether an identifier currently holds a live escrow.
    pub fn is_live(&self, identifier: &TxHash) -> bool {
        self.records.contains_key(identifier)
    }

    /// Number of live records.
    pub fn active_count(&self) -> usize {
        self.records.len()
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<ContractEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Derive an escrow identifier from an amount.
///
/// SHA-256 over the big-endian amount bytes: equal amounts yield equal
/// identifiers, so callers can reproduce an identifier from its amount.
/// The ledger itself treats the result as an opaque key.
pub fn derive_identifier(amount: Amount) -> TxHash {
    let mut hasher = Sha256::new();
    hasher.update(amount.to_be_bytes());
    TxHash::from_bytes(hasher.finalize().into())
}
