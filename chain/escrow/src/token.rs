//! Token Ledger — transfer interface, in-memory token, custody adapter
//!
//! The escrow ledger never owns token balances itself; it drives an external
//! fungible-token collaborator through the narrow [`TokenLedger`] interface.
//! [`InMemoryToken`] is the allowance-model token standing in for that
//! collaborator, and [`CustodyAdapter`] binds it to the ledger's custody
//! account.

use std::collections::HashMap;
use types::ids::AccountId;
use types::numeric::Amount;

use crate::errors::TokenError;

/// Narrow transfer interface the escrow ledger depends on.
///
/// Implementations must be atomic per call: on failure, no balance changes.
pub trait TokenLedger {
    /// Pull `amount` units from `from` into ledger custody.
    ///
    /// Requires `from` to have pre-granted the custody account an allowance
    /// of at least `amount`.
    fn pull(&mut self, from: &AccountId, amount: Amount) -> Result<(), TokenError>;

    /// Release `amount` units from ledger custody to `to`.
    fn release(&mut self, to: &AccountId, amount: Amount) -> Result<(), TokenError>;

    /// Balance of an account in smallest units.
    fn balance_of(&self, account: &AccountId) -> Amount;
}

/// In-memory fungible token with the allowance model.
///
/// Holds balances per account and owner → spender allowances. An owner
/// grants a spender permission to move up to N units on its behalf;
/// `transfer_from` consumes that grant. All arithmetic is checked.
#[derive(Debug, Clone, Default)]
pub struct InMemoryToken {
    /// Balances: account -> amount
    balances: HashMap<AccountId, Amount>,
    /// Allowances: (owner, spender) -> remaining grant
    allowances: HashMap<(AccountId, AccountId), Amount>,
}

impl InMemoryToken {
    /// Create an empty token ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit newly issued units to an account.
    pub fn mint(&mut self, account: AccountId, amount: Amount) -> Result<(), TokenError> {
        let balance = self.balances.entry(account).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(TokenError::Overflow)?;
        Ok(())
    }

    /// Get balance for an account.
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Remaining allowance granted by `owner` to `spender`.
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    /// Grant `spender` permission to move up to `amount` units on behalf of
    /// `owner`. Overwrites any previous grant.
    pub fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) {
        self.allowances.insert((owner, spender), amount);
    }

    /// Direct transfer from `from` to `to`.
    ///
    /// Atomically debits `from` and credits `to`; fails with no balance
    /// change on insufficient funds or overflow.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        self.balances.insert(*from, available - amount);
        self.balances.insert(*to, credited);
        Ok(())
    }

    /// Allowance-based transfer: `spender` moves `amount` from `owner` to `to`.
    ///
    /// The allowance check precedes the balance check; the grant is only
    /// consumed once the transfer has succeeded.
    pub fn transfer_from(
        &mut self,
        spender: &AccountId,
        owner: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let granted = self.allowance(owner, spender);
        if granted < amount {
            return Err(TokenError::InsufficientAllowance {
                required: amount,
                available: granted,
            });
        }
        self.transfer(owner, to, amount)?;
        self.allowances.insert((*owner, *spender), granted - amount);
        Ok(())
    }
}

/// Binds a token to the escrow ledger's custody account.
///
/// `pull` runs the token's allowance-based transfer with the custody account
/// as both spender and destination; `release` transfers directly out of
/// custody. The wrapped token stays reachable for boundary queries.
#[derive(Debug)]
pub struct CustodyAdapter {
    token: InMemoryToken,
    custody: AccountId,
}

impl CustodyAdapter {
    /// Create an adapter holding `token` with `custody` as the escrow account.
    pub fn new(token: InMemoryToken, custody: AccountId) -> Self {
        Self { token, custody }
    }

    /// The ledger's custody account.
    pub fn custody(&self) -> &AccountId {
        &self.custody
    }

    /// Read access to the wrapped token.
    pub fn token(&self) -> &InMemoryToken {
        &self.token
    }

    /// Write access to the wrapped token.
    pub fn token_mut(&mut self) -> &mut InMemoryToken {
        &mut self.token
    }
}

impl TokenLedger for CustodyAdapter {
    fn pull(&mut self, from: &AccountId, amount: Amount) -> Result<(), TokenError> {
        let custody = self.custody;
        self.token.transfer_from(&custody, from, &custody, amount)
    }

    fn release(&mut self, to: &AccountId, amount: Amount) -> Result<(), TokenError> {
        let custody = self.custody;
        self.token.transfer(&custody, to, amount)
    }

    fn balance_of(&self, account: &AccountId) -> Amount {
        self.token.balance_of(account)
    }
}
