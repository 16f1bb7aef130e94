//! Unique identifier types for ledger entities
//!
//! Accounts use UUID v7 for time-sortable ordering, enabling efficient
//! chronological queries. Escrow identifiers are caller-supplied 32-byte
//! values rendered as hex strings.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for an account
///
/// Uses UUID v7 for time-based sorting. Accounts can be efficiently
/// queried in chronological order using the embedded timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Create a new AccountId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-supplied 32-byte escrow identifier ("transaction hash")
///
/// Identifiers are opaque to the ledger; callers choose them and the ledger
/// only enforces uniqueness among live records. The all-zero value is
/// reserved as "no record" and is never a valid key.
///
/// Rendered as a 64-character lowercase hex string (an optional `0x` prefix
/// is accepted when parsing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash([u8; 32]);

impl TxHash {
    /// The reserved empty identifier.
    pub const ZERO: TxHash = TxHash([0u8; 32]);

    /// Create from raw bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check for the reserved all-zero identifier
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

/// Error parsing a hex-encoded escrow identifier
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseTxHashError {
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

impl FromStr for TxHash {
    type Err = ParseTxHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        let raw: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| ParseTxHashError::InvalidLength(bytes.len()))?;
        Ok(Self(raw))
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for TxHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}
