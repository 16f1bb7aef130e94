//! Escrow Flow Tests
//!
//! End-to-end exercises of the deposit/withdraw lifecycle against the
//! in-memory token collaborator:
//! - Happy-path deposit and withdrawal with exact balance walks
//! - Every precondition rejection, with no state change
//! - Allowance gating independent of balance
//! - Open withdrawal authorization (funds route to the owner)
//! - Release-failure atomicity (record survives a failed release)
//! - Property tests: uniqueness and round-trip conservation

use escrow::errors::{EscrowError, TokenError};
use escrow::events::ContractEvent;
use escrow::ledger::{derive_identifier, EscrowLedger};
use escrow::token::{CustodyAdapter, InMemoryToken, TokenLedger};
use proptest::prelude::*;
use types::ids::{AccountId, TxHash};
use types::numeric::Amount;

/// A depositor funded with 80 units who granted the custody account an
/// allowance of 90.
fn setup() -> (EscrowLedger, CustodyAdapter, AccountId) {
    let custody = AccountId::new();
    let depositor = AccountId::new();
    let mut token = InMemoryToken::new();
    token.mint(depositor, 80).unwrap();
    token.approve(depositor, custody, 90);
    (
        EscrowLedger::new(),
        CustodyAdapter::new(token, custody),
        depositor,
    )
}

#[test]
fn happy_path_deposit() {
    let (mut ledger, mut token, depositor) = setup();
    let trx_hash = derive_identifier(10);

    ledger.deposit(&mut token, depositor, trx_hash, 10).unwrap();
    assert_eq!(token.balance_of(&depositor), 70);
}

#[test]
fn deposit_rejects_empty_identifier() {
    let (mut ledger, mut token, depositor) = setup();
    let err = ledger
        .deposit(&mut token, depositor, TxHash::ZERO, 10)
        .unwrap_err();
    assert_eq!(err.to_string(), "Transaction hash cannot be empty");
}

#[test]
fn deposit_rejects_zero_amount() {
    let (mut ledger, mut token, depositor) = setup();
    let err = ledger
        .deposit(&mut token, depositor, derive_identifier(10), 0)
        .unwrap_err();
    assert_eq!(err.to_string(), "Escrow amount must be positive");
}

#[test]
fn deposit_rejects_identifier_conflict() {
    let (mut ledger, mut token, depositor) = setup();
    let trx_hash = derive_identifier(10);

    ledger.deposit(&mut token, depositor, trx_hash, 10).unwrap();
    assert_eq!(token.balance_of(&depositor), 70);

    let err = ledger
        .deposit(&mut token, depositor, trx_hash, 10)
        .unwrap_err();
    assert_eq!(err, EscrowError::IdentifierConflict { identifier: trx_hash });
    // The failed attempt moved nothing
    assert_eq!(token.balance_of(&depositor), 70);
}

#[test]
fn deposit_rejects_missing_allowance() {
    let (mut ledger, mut token, _depositor) = setup();
    // A second account holds funds but never granted an allowance
    let stranger = AccountId::new();
    token.token_mut().mint(stranger, 80).unwrap();

    let err = ledger
        .deposit(&mut token, stranger, derive_identifier(10), 10)
        .unwrap_err();
    assert_eq!(
        err,
        EscrowError::Token(TokenError::InsufficientAllowance {
            required: 10,
            available: 0,
        })
    );
    assert_eq!(token.balance_of(&stranger), 80);
}

#[test]
fn deposit_rejects_insufficient_balance() {
    let (mut ledger, mut token, depositor) = setup();
    // Allowance of 90 covers the request; the balance of 80 does not
    let err = ledger
        .deposit(&mut token, depositor, derive_identifier(85), 85)
        .unwrap_err();
    assert_eq!(
        err,
        EscrowError::Token(TokenError::InsufficientBalance {
            required: 85,
            available: 80,
        })
    );
}

#[test]
fn happy_path_withdrawal() {
    let (mut ledger, mut token, depositor) = setup();
    let trx_hash = derive_identifier(10);

    ledger.deposit(&mut token, depositor, trx_hash, 10).unwrap();
    assert_eq!(token.balance_of(&depositor), 70);

    ledger.withdraw(&mut token, trx_hash).unwrap();
    assert_eq!(token.balance_of(&depositor), 80);
    assert!(!ledger.is_live(&trx_hash));
}

#[test]
fn withdrawal_rejects_empty_identifier() {
    let (mut ledger, mut token, _depositor) = setup();
    let err = ledger.withdraw(&mut token, TxHash::ZERO).unwrap_err();
    assert_eq!(err.to_string(), "Transaction hash cannot be empty");
}

#[test]
fn withdrawal_rejects_unknown_identifier() {
    let (mut ledger, mut token, depositor) = setup();
    ledger
        .deposit(&mut token, depositor, derive_identifier(10), 10)
        .unwrap();

    // Never deposited under this identifier
    let unused = derive_identifier(1);
    let err = ledger.withdraw(&mut token, unused).unwrap_err();
    assert_eq!(err, EscrowError::RecordNotFound { identifier: unused });
}

#[test]
fn withdrawal_by_any_caller_routes_funds_to_owner() {
    // Open authorization: a caller presenting a live identifier triggers
    // release, and the funds go to the stored owner, not the caller.
    let (mut ledger, mut token, depositor) = setup();
    let trx_hash = derive_identifier(10);
    ledger.deposit(&mut token, depositor, trx_hash, 10).unwrap();

    let event = ledger.withdraw(&mut token, trx_hash).unwrap();
    match event {
        ContractEvent::AmountWithdrawn(e) => assert_eq!(e.owner, depositor),
        other => panic!("unexpected event: {:?}", other),
    }
    assert_eq!(token.balance_of(&depositor), 80);
}

#[test]
fn custody_balance_matches_live_records() {
    let (mut ledger, mut token, depositor) = setup();
    let h1 = derive_identifier(10);
    let h2 = derive_identifier(25);

    ledger.deposit(&mut token, depositor, h1, 10).unwrap();
    ledger.deposit(&mut token, depositor, h2, 25).unwrap();
    assert_eq!(token.balance_of(token.custody()), 35);

    ledger.withdraw(&mut token, h1).unwrap();
    assert_eq!(token.balance_of(token.custody()), 25);
    assert_eq!(ledger.active_count(), 1);
}

// ═══════════════════════════════════════════════════════════════════
// Release-failure atomicity
// ═══════════════════════════════════════════════════════════════════

/// Token ledger whose custody is frozen: pulls succeed, releases fail.
struct FrozenCustody(CustodyAdapter);

impl TokenLedger for FrozenCustody {
    fn pull(&mut self, from: &AccountId, amount: Amount) -> Result<(), TokenError> {
        self.0.pull(from, amount)
    }

    fn release(&mut self, _to: &AccountId, amount: Amount) -> Result<(), TokenError> {
        Err(TokenError::InsufficientBalance {
            required: amount,
            available: 0,
        })
    }

    fn balance_of(&self, account: &AccountId) -> Amount {
        self.0.balance_of(account)
    }
}

#[test]
fn failed_release_leaves_record_intact() {
    let (mut ledger, token, depositor) = setup();
    let mut frozen = FrozenCustody(token);
    let trx_hash = derive_identifier(10);
    ledger.deposit(&mut frozen, depositor, trx_hash, 10).unwrap();

    let err = ledger.withdraw(&mut frozen, trx_hash).unwrap_err();
    assert!(matches!(err, EscrowError::Token(_)));

    // Custody bookkeeping must survive the failed release
    assert!(ledger.is_live(&trx_hash));
    assert_eq!(ledger.record(&trx_hash).map(|r| r.amount), Some(10));
    // No withdrawal event was logged
    assert_eq!(ledger.events().len(), 1);
}

// ═══════════════════════════════════════════════════════════════════
// Property tests
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn round_trip_conserves_balance(amount in 1..=Amount::from(u64::MAX)) {
        let custody = AccountId::new();
        let depositor = AccountId::new();
        let mut token = InMemoryToken::new();
        token.mint(depositor, amount).unwrap();
        token.approve(depositor, custody, amount);

        let mut adapter = CustodyAdapter::new(token, custody);
        let mut ledger = EscrowLedger::new();
        let identifier = derive_identifier(amount);

        ledger.deposit(&mut adapter, depositor, identifier, amount).unwrap();
        prop_assert_eq!(adapter.balance_of(&depositor), 0);

        ledger.withdraw(&mut adapter, identifier).unwrap();
        prop_assert_eq!(adapter.balance_of(&depositor), amount);
        prop_assert!(!ledger.is_live(&identifier));
    }

    #[test]
    fn live_identifier_rejects_any_second_deposit(
        first in 1..=Amount::from(u32::MAX),
        second in 1..=Amount::from(u32::MAX),
    ) {
        let custody = AccountId::new();
        let depositor = AccountId::new();
        let mut token = InMemoryToken::new();
        token.mint(depositor, first + second).unwrap();
        token.approve(depositor, custody, first + second);

        let mut adapter = CustodyAdapter::new(token, custody);
        let mut ledger = EscrowLedger::new();
        let identifier = derive_identifier(first);

        ledger.deposit(&mut adapter, depositor, identifier, first).unwrap();
        let result = ledger.deposit(&mut adapter, depositor, identifier, second);
        prop_assert_eq!(result, Err(EscrowError::IdentifierConflict { identifier }));
    }

    #[test]
    fn derived_identifiers_are_deterministic_and_nonzero(amount in any::<Amount>()) {
        prop_assert_eq!(derive_identifier(amount), derive_identifier(amount));
        prop_assert!(!derive_identifier(amount).is_zero());
    }
}
