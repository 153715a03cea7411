//! Decrypt command implementation

use std::io::Read;
use std::path::PathBuf;

use crate::crypto::envelope::decrypt_message;
use crate::crypto::keys::{load_identity, KeyError};
use crate::recovery::{RecoveryError, RecoveryRequest};

#[derive(Debug, thiserror::Error)]
pub enum DecryptCommandError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    #[error("{0}")]
    Recovery(#[from] RecoveryError),
}

/// Decrypt an armored recovery request and print its fields
pub fn decrypt(identity: PathBuf, input: Option<PathBuf>) -> Result<(), DecryptCommandError> {
    let identity = load_identity(&identity)?;

    let armored = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let plaintext = decrypt_message(&armored, &identity)?;
    let request = RecoveryRequest::parse_plaintext(&plaintext)?;

    println!("✓ Recovery request decrypted");
    println!();
    println!("  Claimed address: {}", request.address());
    println!("  Payout address:  {}", request.payout());
    println!("  Seed:            {}", request.seed());

    Ok(())
}
