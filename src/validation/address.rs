//! Claimed (legacy) and payout (bech32) address validation

use bitcoin::bech32::primitives::decode::CheckedHrpstring;
use bitcoin::bech32::Bech32;

use super::kerl::hash_trytes;
use super::trinary::{
    is_trytes, tryte_to_trits, ADDRESS_CHECKSUM_TRYTES_SIZE, HASH_TRYTES_SIZE,
};
use super::ValidationError;

/// Length of a legacy address including its checksum
pub const ADDRESS_WITH_CHECKSUM_TRYTES_SIZE: usize =
    HASH_TRYTES_SIZE + ADDRESS_CHECKSUM_TRYTES_SIZE;

/// Maximum length of a bech32 string
pub const BECH32_MAX_LENGTH: usize = 90;

/// Compute the 9-tryte checksum of an 81-tryte address
///
/// The checksum is the last 9 trytes of the Kerl hash of the address.
pub fn address_checksum(address: &str) -> Result<String, ValidationError> {
    check_trytes(address, HASH_TRYTES_SIZE)?;

    let hash = hash_trytes(address)?;
    Ok(hash[HASH_TRYTES_SIZE - ADDRESS_CHECKSUM_TRYTES_SIZE..].to_string())
}

/// Append the checksum to an 81-tryte address
pub fn with_checksum(address: &str) -> Result<String, ValidationError> {
    let checksum = address_checksum(address)?;
    Ok(format!("{}{}", address, checksum))
}

/// Validate a 90-tryte legacy address (address + checksum)
///
/// # Checks
///
/// 1. exactly 90 trytes
/// 2. the most significant trit of the last address tryte is 0
/// 3. the trailing 9 trytes match the Kerl checksum of the first 81
pub fn validate_claimed_address(address: &str) -> Result<(), ValidationError> {
    check_trytes(address, ADDRESS_WITH_CHECKSUM_TRYTES_SIZE)?;

    let (body, checksum) = address.split_at(HASH_TRYTES_SIZE);

    // Kerl addresses always end in a zero trit
    let last_tryte = body.chars().last().ok_or(ValidationError::InvalidTrytes)?;
    let last_trits = tryte_to_trits(last_tryte).map_err(|_| ValidationError::InvalidTrytes)?;
    if last_trits[2] != 0 {
        return Err(ValidationError::InvalidLastTrit);
    }

    let expected = address_checksum(body)?;
    if expected != checksum {
        log::debug!("Claimed address checksum mismatch");
        return Err(ValidationError::ChecksumMismatch {
            expected,
            actual: checksum.to_string(),
        });
    }

    Ok(())
}

/// Decode a bech32 payout address
///
/// Only the classic bech32 checksum is accepted. When `required_prefix` is set
/// the human-readable part must match it (case-insensitive).
///
/// # Returns
///
/// The lowercase human-readable prefix
pub fn validate_payout_address(
    payout: &str,
    required_prefix: Option<&str>,
) -> Result<String, ValidationError> {
    let length = payout.chars().count();
    if length > BECH32_MAX_LENGTH {
        return Err(ValidationError::TooLong {
            max: BECH32_MAX_LENGTH,
            actual: length,
        });
    }

    let checked = CheckedHrpstring::new::<Bech32>(payout)
        .map_err(|e| ValidationError::Bech32(e.to_string()))?;
    let prefix = checked.hrp().to_string().to_lowercase();

    if let Some(expected) = required_prefix {
        if !prefix.eq_ignore_ascii_case(expected) {
            return Err(ValidationError::UnexpectedPrefix {
                expected: expected.to_string(),
                actual: prefix,
            });
        }
    }

    Ok(prefix)
}

fn check_trytes(s: &str, expected: usize) -> Result<(), ValidationError> {
    let actual = s.chars().count();
    if actual != expected {
        return Err(ValidationError::InvalidLength { expected, actual });
    }
    if !is_trytes(s) {
        return Err(ValidationError::InvalidTrytes);
    }
    Ok(())
}
