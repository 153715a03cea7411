//! Seed validation

use super::trinary::{is_trytes, HASH_TRYTES_SIZE};
use super::ValidationError;

/// Length of a legacy seed in trytes
pub const SEED_TRYTES_SIZE: usize = HASH_TRYTES_SIZE;

/// Validate an 81-tryte seed
pub fn validate_seed(seed: &str) -> Result<(), ValidationError> {
    let actual = seed.chars().count();
    if actual != SEED_TRYTES_SIZE {
        return Err(ValidationError::InvalidLength {
            expected: SEED_TRYTES_SIZE,
            actual,
        });
    }
    if !is_trytes(seed) {
        return Err(ValidationError::InvalidTrytes);
    }
    Ok(())
}
