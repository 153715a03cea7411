//! Trinary primitives for legacy IOTA strings
//!
//! A tryte is one character of `9ABCDEFGHIJKLMNOPQRSTUVWXYZ` and encodes three
//! balanced trits (`-1`, `0`, `1`), least significant first.

/// Single balanced ternary digit
pub type Trit = i8;

/// Tryte alphabet, indexed by the unsigned tryte value (0..27)
pub const TRYTE_ALPHABET: &str = "9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of trits encoded by one tryte
pub const TRITS_PER_TRYTE: usize = 3;

/// Length of a hash/address in trytes
pub const HASH_TRYTES_SIZE: usize = 81;

/// Length of a hash/address in trits
pub const HASH_TRITS_SIZE: usize = HASH_TRYTES_SIZE * TRITS_PER_TRYTE;

/// Length of the legacy address checksum in trytes
pub const ADDRESS_CHECKSUM_TRYTES_SIZE: usize = 9;

/// Errors raised by trinary conversions
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TrinaryError {
    #[error("Invalid tryte character '{0}'")]
    InvalidTryte(char),

    #[error("Invalid trit value {0}")]
    InvalidTrit(Trit),

    #[error("Trit slice length {0} is not a multiple of 3")]
    InvalidTritsLength(usize),
}

/// Check whether `c` belongs to the tryte alphabet
pub fn is_tryte(c: char) -> bool {
    c == '9' || c.is_ascii_uppercase()
}

/// Check whether every character of `s` is a tryte
///
/// An empty string is not considered trytes.
pub fn is_trytes(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_tryte)
}

/// Signed value (-13..=13) of a single tryte
pub fn tryte_value(c: char) -> Result<i8, TrinaryError> {
    match c {
        '9' => Ok(0),
        'A'..='M' => Ok((c as u8 - b'A') as i8 + 1),
        'N'..='Z' => Ok((c as u8 - b'N') as i8 - 13),
        _ => Err(TrinaryError::InvalidTryte(c)),
    }
}

/// Expand a single tryte into its three trits
pub fn tryte_to_trits(c: char) -> Result<[Trit; TRITS_PER_TRYTE], TrinaryError> {
    let mut value = tryte_value(c)?;
    let mut trits = [0; TRITS_PER_TRYTE];
    for trit in trits.iter_mut() {
        // Balanced remainder in {-1, 0, 1}
        let rem = (value + 1).rem_euclid(3) - 1;
        *trit = rem;
        value = (value - rem) / 3;
    }
    Ok(trits)
}

/// Convert a tryte string into trits
pub fn trytes_to_trits(trytes: &str) -> Result<Vec<Trit>, TrinaryError> {
    let mut trits = Vec::with_capacity(trytes.len() * TRITS_PER_TRYTE);
    for c in trytes.chars() {
        trits.extend_from_slice(&tryte_to_trits(c)?);
    }
    Ok(trits)
}

/// Convert trits back into a tryte string
pub fn trits_to_trytes(trits: &[Trit]) -> Result<String, TrinaryError> {
    if trits.len() % TRITS_PER_TRYTE != 0 {
        return Err(TrinaryError::InvalidTritsLength(trits.len()));
    }

    let alphabet = TRYTE_ALPHABET.as_bytes();
    let mut trytes = String::with_capacity(trits.len() / TRITS_PER_TRYTE);
    for chunk in trits.chunks(TRITS_PER_TRYTE) {
        if let Some(&bad) = chunk.iter().find(|t| !(-1..=1).contains(*t)) {
            return Err(TrinaryError::InvalidTrit(bad));
        }
        let value = chunk[0] + chunk[1] * 3 + chunk[2] * 9;
        trytes.push(alphabet[value.rem_euclid(27) as usize] as char);
    }
    Ok(trytes)
}
