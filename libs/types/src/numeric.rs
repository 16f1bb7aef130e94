//! Token amount type
//!
//! Amounts are unsigned integers denominated in the token's smallest unit,
//! so balance arithmetic is exact. Mutating operations use checked
//! arithmetic; overflow surfaces as an error rather than wrapping.

/// Token amount in smallest units.
pub type Amount = u128;
