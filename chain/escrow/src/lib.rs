//! Escrow Ledger Logic for Custody & Settlement
//!
//! This crate implements the escrow bookkeeping layer: a depositor locks a
//! quantity of a fungible token under a caller-supplied unique identifier
//! and later reclaims it exactly once. Token movement goes through a narrow
//! injected interface so the core can run against any fungible-token
//! collaborator.
//!
//! # Modules
//! - `errors`: Escrow and token-ledger error taxonomy
//! - `events`: Events emitted by ledger operations
//! - `token`: Token ledger interface, in-memory token, custody adapter
//! - `ledger`: Identifier-keyed escrow records and their state machine

pub mod errors;
pub mod events;
pub mod ledger;
pub mod token;
