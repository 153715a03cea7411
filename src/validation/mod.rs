//! Format validation for recovery request fields
//!
//! Legacy addresses and seeds are tryte strings; the address carries a Kerl
//! checksum. Payout addresses are bech32 strings.

pub mod address;
pub mod kerl;
pub mod seed;
pub mod trinary;

pub use address::{address_checksum, validate_claimed_address, validate_payout_address};
pub use seed::validate_seed;

use kerl::KerlError;

/// Field validation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid length: expected {expected} trytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("contains characters outside the tryte alphabet (9, A-Z)")]
    InvalidTrytes,

    #[error("last trit of the address is not 0")]
    InvalidLastTrit,

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("invalid bech32 string: {0}")]
    Bech32(String),

    #[error("bech32 string too long: {actual} characters (maximum {max})")]
    TooLong { max: usize, actual: usize },

    #[error("unexpected prefix '{actual}' (expected '{expected}')")]
    UnexpectedPrefix { expected: String, actual: String },

    #[error("Kerl error: {0}")]
    Kerl(#[from] KerlError),
}
