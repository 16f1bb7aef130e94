pub mod escrow;
pub mod token;
