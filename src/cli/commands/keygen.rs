//! Keygen command implementation

use std::path::PathBuf;

use crate::crypto::keys::{generate_identity, public_key_path, KeyError};

/// Generate a new recovery identity for key rotation
pub fn keygen(output: PathBuf, user_id: &str) -> Result<(), KeyError> {
    generate_identity(&output, user_id)?;

    println!("✓ Recovery identity generated");
    println!();
    println!("  Secret key: {}", output.display());
    println!("  Public key: {}", public_key_path(&output).display());
    println!("  User ID:    {}", user_id);
    println!();
    println!("  Distribute the public key with --recipient-file or RECOVERY_RECIPIENT_FILE.");
    println!("  Keep the secret key file secret!");

    Ok(())
}
