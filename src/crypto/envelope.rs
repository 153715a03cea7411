//! Armored OpenPGP encryption of recovery messages

use pgp::crypto::sym::SymmetricKeyAlgorithm;
use pgp::packet::Signature;
use pgp::{
    ArmorOptions, Deserializable, Message, SignedPublicKey, SignedPublicSubKey, SignedSecretKey,
};

use super::keys::KeyError;

/// First line of an armored block
pub const ARMOR_BEGIN: &str = "-----BEGIN PGP MESSAGE-----";

/// Last line of an armored block
pub const ARMOR_END: &str = "-----END PGP MESSAGE-----";

const LITERAL_FILE_NAME: &str = "";

/// Encrypt `plaintext` to `recipient` and return an ASCII-armored block
///
/// Encrypts to every subkey flagged for encryption, or to the primary key
/// when only the primary carries the encryption flags. A fresh session key
/// is used on every call, so encrypting the same plaintext twice yields
/// different blocks.
pub fn encrypt_message(plaintext: &str, recipient: &SignedPublicKey) -> Result<String, KeyError> {
    let mut rng = rand::thread_rng();
    let message = Message::new_literal(LITERAL_FILE_NAME, plaintext);

    let subkeys = encryption_subkeys(recipient);
    let result = if !subkeys.is_empty() {
        message.encrypt_to_keys_seipdv1(&mut rng, SymmetricKeyAlgorithm::AES256, &subkeys[..])
    } else if primary_can_encrypt(recipient) {
        message.encrypt_to_keys_seipdv1(&mut rng, SymmetricKeyAlgorithm::AES256, &[recipient])
    } else {
        return Err(KeyError::Encryption(
            "public key has no encryption-capable key".to_string(),
        ));
    };
    let encrypted = result.map_err(|e| KeyError::Encryption(e.to_string()))?;

    let armored = encrypted
        .to_armored_string(ArmorOptions::default())
        .map_err(|e| KeyError::Encryption(e.to_string()))?;

    Ok(armored.trim_end().to_string())
}

/// Decrypt an armored block with an unprotected secret key
pub fn decrypt_message(armored: &str, identity: &SignedSecretKey) -> Result<String, KeyError> {
    let (message, _headers) = Message::from_string(armored.trim())
        .map_err(|e| KeyError::Decryption(format!("not an armored PGP message: {}", e)))?;

    let (decrypted, _key_ids) = message
        .decrypt(String::new, &[identity])
        .map_err(|e| KeyError::Decryption(format!("decryption failed: {}", e)))?;

    let content = decrypted
        .decompress()
        .and_then(|m| m.get_content())
        .map_err(|e| KeyError::Decryption(format!("unreadable message: {}", e)))?
        .ok_or_else(|| KeyError::Decryption("message has no literal data".to_string()))?;

    String::from_utf8(content)
        .map_err(|e| KeyError::Decryption(format!("message is not valid UTF-8: {}", e)))
}

/// Whether `key` has any key usable for encryption
pub(crate) fn has_encryption_key(key: &SignedPublicKey) -> bool {
    !encryption_subkeys(key).is_empty() || primary_can_encrypt(key)
}

fn encryption_subkeys(key: &SignedPublicKey) -> Vec<&SignedPublicSubKey> {
    key.public_subkeys
        .iter()
        .filter(|subkey| flags_allow_encryption(&subkey.signatures))
        .collect()
}

fn primary_can_encrypt(key: &SignedPublicKey) -> bool {
    let user_signatures = key.details.users.iter().flat_map(|user| user.signatures.iter());
    let direct_signatures = key.details.direct_signatures.iter();

    user_signatures
        .chain(direct_signatures)
        .any(signature_allows_encryption)
}

fn flags_allow_encryption(signatures: &[Signature]) -> bool {
    signatures.iter().any(signature_allows_encryption)
}

fn signature_allows_encryption(signature: &Signature) -> bool {
    let flags = signature.key_flags();
    flags.encrypt_comms() || flags.encrypt_storage()
}
