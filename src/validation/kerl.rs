//! Kerl sponge
//!
//! Keccak-384 adapted to ternary input and output. Every 243-trit block is
//! mapped onto a 384-bit two's complement integer (its last trit is always
//! treated as zero) before being fed to Keccak, and every 48-byte digest is
//! mapped back onto 243 balanced trits.

use sha3::{Digest, Keccak384};

use super::trinary::{trits_to_trytes, trytes_to_trits, Trit, TrinaryError, HASH_TRITS_SIZE};

/// Size of a Keccak-384 digest in bytes
pub const HASH_BYTES_SIZE: usize = 48;

const LIMBS: usize = HASH_BYTES_SIZE / 4;

/// Kerl errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KerlError {
    #[error("Trit length {0} is not a non-zero multiple of 243")]
    InvalidLength(usize),

    #[error(transparent)]
    Trinary(#[from] TrinaryError),
}

/// Ternary sponge backed by Keccak-384
#[derive(Clone, Default)]
pub struct Kerl {
    keccak: Keccak384,
}

impl Kerl {
    /// Create an empty sponge
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb trits in blocks of 243
    pub fn absorb(&mut self, trits: &[Trit]) -> Result<(), KerlError> {
        if trits.is_empty() || trits.len() % HASH_TRITS_SIZE != 0 {
            return Err(KerlError::InvalidLength(trits.len()));
        }
        if let Some(&bad) = trits.iter().find(|t| !(-1..=1).contains(*t)) {
            return Err(TrinaryError::InvalidTrit(bad).into());
        }

        for chunk in trits.chunks(HASH_TRITS_SIZE) {
            self.keccak.update(trits_to_bytes(chunk));
        }
        Ok(())
    }

    /// Squeeze `length` trits out of the sponge (`length` a multiple of 243)
    pub fn squeeze(&mut self, length: usize) -> Result<Vec<Trit>, KerlError> {
        if length == 0 || length % HASH_TRITS_SIZE != 0 {
            return Err(KerlError::InvalidLength(length));
        }

        let mut out = Vec::with_capacity(length);
        for _ in 0..length / HASH_TRITS_SIZE {
            let digest = self.keccak.finalize_reset();
            let mut bytes = [0u8; HASH_BYTES_SIZE];
            bytes.copy_from_slice(digest.as_slice());

            out.extend_from_slice(&bytes_to_trits(&bytes));

            // Next block is seeded with the complement of this digest
            let flipped: Vec<u8> = bytes.iter().map(|b| !b).collect();
            self.keccak.update(&flipped);
        }
        Ok(out)
    }
}

/// Hash a tryte string into an 81-tryte digest
pub fn hash_trytes(trytes: &str) -> Result<String, KerlError> {
    let trits = trytes_to_trits(trytes)?;
    let mut kerl = Kerl::new();
    kerl.absorb(&trits)?;
    let hash = kerl.squeeze(HASH_TRITS_SIZE)?;
    Ok(trits_to_trytes(&hash)?)
}

/// Map the first 242 trits of a block onto a big-endian two's complement integer
fn trits_to_bytes(trits: &[Trit]) -> [u8; HASH_BYTES_SIZE] {
    let mut limbs = [0u32; LIMBS];

    // Horner evaluation from the most significant trit, modulo 2^384
    for &trit in trits[..HASH_TRITS_SIZE - 1].iter().rev() {
        let mut carry = 0u64;
        for limb in limbs.iter_mut() {
            let v = *limb as u64 * 3 + carry;
            *limb = v as u32;
            carry = v >> 32;
        }
        match trit {
            1 => increment(&mut limbs),
            -1 => decrement(&mut limbs),
            _ => {}
        }
    }

    let mut bytes = [0u8; HASH_BYTES_SIZE];
    for (i, limb) in limbs.iter().rev().enumerate() {
        bytes[i * 4..i * 4 + 4].copy_from_slice(&limb.to_be_bytes());
    }
    bytes
}

/// Map a big-endian two's complement integer onto 243 balanced trits
///
/// The value is reduced modulo 3^242; the last trit is always zero.
fn bytes_to_trits(bytes: &[u8; HASH_BYTES_SIZE]) -> [Trit; HASH_TRITS_SIZE] {
    let mut limbs = [0u32; LIMBS];
    for (i, chunk) in bytes.chunks_exact(4).enumerate() {
        limbs[LIMBS - 1 - i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let negative = limbs[LIMBS - 1] >> 31 == 1;
    if negative {
        for limb in limbs.iter_mut() {
            *limb = !*limb;
        }
        increment(&mut limbs);
    }

    let mut trits = [0; HASH_TRITS_SIZE];
    for trit in trits[..HASH_TRITS_SIZE - 1].iter_mut() {
        match div_by_three(&mut limbs) {
            2 => {
                *trit = -1;
                increment(&mut limbs);
            }
            rem => *trit = rem as Trit,
        }
    }

    if negative {
        for trit in trits.iter_mut() {
            *trit = -*trit;
        }
    }
    trits
}

fn increment(limbs: &mut [u32; LIMBS]) {
    for limb in limbs.iter_mut() {
        let (v, overflow) = limb.overflowing_add(1);
        *limb = v;
        if !overflow {
            break;
        }
    }
}

fn decrement(limbs: &mut [u32; LIMBS]) {
    for limb in limbs.iter_mut() {
        let (v, overflow) = limb.overflowing_sub(1);
        *limb = v;
        if !overflow {
            break;
        }
    }
}

/// Divide in place, returning the remainder
fn div_by_three(limbs: &mut [u32; LIMBS]) -> u64 {
    let mut rem = 0u64;
    for limb in limbs.iter_mut().rev() {
        let cur = (rem << 32) | *limb as u64;
        *limb = (cur / 3) as u32;
        rem = cur % 3;
    }
    rem
}
