//! Common fixtures for iota-recovery-tool integration tests
//!
//! Addresses carry real Kerl checksums; payout addresses are valid bech32.

#![allow(dead_code)]

use iota_recovery_tool::crypto::keys::generate_key_pair;
use iota_recovery_tool::recovery::RawInput;
use pgp::{SignedPublicKey, SignedSecretKey};
use std::sync::OnceLock;

/// Legacy address with a valid checksum
pub const VALID_ADDRESS: &str =
    "GYOMKVTSNHVJNCNFBBAH9AAMXLPLLLROQY99QN9DLSJUHDPBLCFFAIQXZA9BKMBJCYSFHFPXAHDWZFEIZVKVDQEWTW";

/// Second legacy address with a valid checksum
pub const OTHER_VALID_ADDRESS: &str =
    "XUERGHWTYRTFUYKFKXURKHMFEVLOIFTTCNTXOGLDPCZ9CJLKHROOPGNAQYFJEPGK9OKUQROUECBAVNXRWLMPX9BO9X";

/// Same address as [`VALID_ADDRESS`] with a corrupted checksum
pub const BAD_CHECKSUM_ADDRESS: &str =
    "GYOMKVTSNHVJNCNFBBAH9AAMXLPLLLROQY99QN9DLSJUHDPBLCFFAIQXZA9BKMBJCYSFHFPXAHDWZFEIZVKVDQEWTX";

/// Correctly checksummed, but the last address trit is not zero
pub const NONZERO_LAST_TRIT_ADDRESS: &str =
    "99999999999999999999999999999999999999999999999999999999999999999999999999999999MUOKVPQT9W";

/// Mainnet bech32 payout address
pub const VALID_PAYOUT: &str = "iota1qqzdcneakrsatnkhp9yzm3acdt0xu94q2q79e26tcrv7t26nnfluzr4m0ps";

/// Testnet bech32 payout address (same payload as [`VALID_PAYOUT`])
pub const TESTNET_PAYOUT: &str = "atoi1qqzdcneakrsatnkhp9yzm3acdt0xu94q2q79e26tcrv7t26nnfluzym2wma";

/// 81-tryte seed
pub const VALID_SEED: &str =
    "SEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEEDSEED9";

pub fn valid_input() -> RawInput {
    RawInput {
        address: VALID_ADDRESS.to_string(),
        payout: VALID_PAYOUT.to_string(),
        seed: VALID_SEED.to_string(),
    }
}

/// Console input for one interactive session (three fields plus the exit line)
pub fn console_input(address: &str, payout: &str, seed: &str) -> String {
    format!("{}\n{}\n{}\n\n", address, payout, seed)
}

pub fn expected_plaintext(address: &str, payout: &str, seed: &str) -> String {
    format!("Address: {}\nPayout: {}\nSeed: {}\n", address, payout, seed)
}

static TEST_KEY: OnceLock<(SignedSecretKey, SignedPublicKey)> = OnceLock::new();
static OTHER_TEST_KEY: OnceLock<(SignedSecretKey, SignedPublicKey)> = OnceLock::new();

/// Secret key and its public key, generated once per test binary
pub fn test_identity() -> (SignedSecretKey, SignedPublicKey) {
    TEST_KEY
        .get_or_init(|| generate_key_pair("Test Operator <test@localhost>").unwrap())
        .clone()
}

/// A second, unrelated key pair
pub fn other_test_identity() -> (SignedSecretKey, SignedPublicKey) {
    OTHER_TEST_KEY
        .get_or_init(|| generate_key_pair("Other Operator <other@localhost>").unwrap())
        .clone()
}
