use crate::error::AppError;
use escrow::ledger::EscrowLedger;
use escrow::token::CustodyAdapter;
use std::sync::{Arc, Mutex, MutexGuard};

/// Escrow ledger plus the token custody it drives.
///
/// Held behind a single mutex so every deposit/withdraw runs its full
/// read-check-write sequence with no interleaving of a second operation.
#[derive(Debug)]
pub struct LedgerState {
    pub escrow: EscrowLedger,
    pub token: CustodyAdapter,
}

#[derive(Clone)]
pub struct AppState {
    ledger: Arc<Mutex<LedgerState>>,
}

impl AppState {
    pub fn new(token: CustodyAdapter) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(LedgerState {
                escrow: EscrowLedger::new(),
                token,
            })),
        }
    }

    /// Acquire the serialization point for one whole operation.
    pub fn lock(&self) -> Result<MutexGuard<'_, LedgerState>, AppError> {
        self.ledger
            .lock()
            .map_err(|_| AppError::InternalError(anyhow::anyhow!("ledger lock poisoned")))
    }
}
