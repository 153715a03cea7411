//! Recovery key handling
//!
//! Resolves the OpenPGP public key that recovery requests are encrypted to,
//! and loads or generates the matching secret key on the operator side.

use pgp::crypto::ecc_curve::ECCCurve;
use pgp::types::SecretKeyTrait;
use pgp::{
    ArmorOptions, Deserializable, KeyType, SecretKeyParamsBuilder, SignedPublicKey,
    SignedSecretKey, SubkeyParamsBuilder,
};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{GlobalConfig, DEFAULT_RECIPIENT};

/// Extension appended to an identity path for its public key file
pub const PUBLIC_KEY_EXTENSION: &str = "pub.asc";

/// User ID bound to generated keys unless another is given
pub const DEFAULT_USER_ID: &str = "IOTA Recovery Tool Operator <recovery@localhost>";

/// Key handling and encryption errors
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("Key file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Key generation failed: {0}")]
    Generation(String),

    #[error("{0}")]
    Encryption(String),

    #[error("{0}")]
    Decryption(String),
}

/// Parse an armored `PGP PUBLIC KEY BLOCK`
///
/// The key must carry at least one encryption-capable key.
pub fn parse_recipient(text: &str) -> Result<SignedPublicKey, KeyError> {
    let (key, _headers) = SignedPublicKey::from_string(text.trim())
        .map_err(|e| KeyError::InvalidRecipient(e.to_string()))?;

    if !super::envelope::has_encryption_key(&key) {
        return Err(KeyError::InvalidRecipient(
            "public key has no encryption-capable key".to_string(),
        ));
    }
    Ok(key)
}

/// The built-in recovery recipient
pub fn default_recipient() -> Result<SignedPublicKey, KeyError> {
    parse_recipient(DEFAULT_RECIPIENT)
}

/// Resolve the recipient from configuration
///
/// Inline key first, then key file, then the built-in default.
pub fn load_recipient(config: &GlobalConfig) -> Result<SignedPublicKey, KeyError> {
    if let Some(key) = &config.recipient.public_key {
        log::debug!("Using configured recipient");
        return parse_recipient(key);
    }

    if let Some(file) = &config.recipient.public_key_file {
        log::debug!("Reading recipient from {}", file);
        let contents = fs::read_to_string(file)?;
        return parse_recipient(&contents);
    }

    log::debug!("Using built-in recovery recipient");
    default_recipient()
}

/// Load an unprotected armored secret key from a file
pub fn load_identity(path: &Path) -> Result<SignedSecretKey, KeyError> {
    let contents = fs::read_to_string(path)?;

    let (identity, _headers) = SignedSecretKey::from_string(contents.trim()).map_err(|e| {
        KeyError::InvalidIdentity(format!("{}: {}", path.display(), e))
    })?;

    log::info!("Loaded identity from {}", path.display());
    Ok(identity)
}

/// Path of the public key written next to an identity file
pub fn public_key_path(identity_path: &Path) -> PathBuf {
    let mut name = identity_path.as_os_str().to_os_string();
    name.push(".");
    name.push(PUBLIC_KEY_EXTENSION);
    PathBuf::from(name)
}

/// Generate a key pair in memory
///
/// RSA primary key for certification, X25519 subkey for encryption. The
/// secret key is not passphrase protected.
pub fn generate_key_pair(
    user_id: &str,
) -> Result<(SignedSecretKey, SignedPublicKey), KeyError> {
    let mut rng = rand::thread_rng();

    let subkey = SubkeyParamsBuilder::default()
        .key_type(KeyType::ECDH(ECCCurve::Curve25519))
        .can_encrypt(true)
        .build()
        .map_err(|e| KeyError::Generation(e.to_string()))?;

    let params = SecretKeyParamsBuilder::default()
        .key_type(KeyType::Rsa(2048))
        .can_certify(true)
        .can_sign(true)
        .primary_user_id(user_id.to_string())
        .subkey(subkey)
        .build()
        .map_err(|e| KeyError::Generation(e.to_string()))?;

    let secret = params
        .generate(&mut rng)
        .and_then(|key| key.sign(&mut rng, String::new))
        .map_err(|e| KeyError::Generation(e.to_string()))?;

    let public = secret
        .public_key()
        .sign(&mut rng, &secret, String::new)
        .map_err(|e| KeyError::Generation(e.to_string()))?;

    Ok((secret, public))
}

/// Generate a new identity and write it to `path`
///
/// The armored secret key goes to `path` (mode 0600 on unix) and the armored
/// public key to [`public_key_path`]. Refuses to overwrite either file.
pub fn generate_identity(path: &Path, user_id: &str) -> Result<SignedPublicKey, KeyError> {
    let public_path = public_key_path(path);
    for existing in [path, public_path.as_path()] {
        if existing.exists() {
            return Err(KeyError::AlreadyExists(existing.to_path_buf()));
        }
    }

    let (secret, public) = generate_key_pair(user_id)?;

    let secret_armor = secret
        .to_armored_string(ArmorOptions::default())
        .map_err(|e| KeyError::Generation(e.to_string()))?;
    let public_armor = public
        .to_armored_string(ArmorOptions::default())
        .map_err(|e| KeyError::Generation(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, secret_armor.as_bytes())?;
    restrict_permissions(path)?;
    fs::write(&public_path, public_armor.as_bytes())?;

    log::info!("Generated identity at {}", path.display());
    Ok(public)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), KeyError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), KeyError> {
    Ok(())
}
