//! Interactive recovery flow
//!
//! Collect → Validate → Encrypt → Present. Any failure skips straight to the
//! error report; there are no retries. Both outcomes end with the exit prompt.

pub mod presenter;
pub mod prompt;
pub mod request;

pub use request::{RawInput, RecoveryRequest};

use pgp::SignedPublicKey;
use std::io::{BufRead, Write};

use crate::crypto::envelope::encrypt_message;
use crate::crypto::keys::KeyError;
use crate::validation::ValidationError;

/// Recovery flow errors
#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("The entered Claimed address is invalid:\n{0}")]
    ClaimedAddress(ValidationError),

    #[error("The entered Bech32 Payout address is invalid:\n{0}")]
    PayoutAddress(ValidationError),

    #[error("The entered Seed is invalid:\n{0}")]
    Seed(ValidationError),

    #[error("failed to encrypt message: {0}")]
    Encryption(KeyError),

    #[error("Malformed recovery message: {0}")]
    MalformedMessage(String),
}

/// Validate raw input and encrypt it
///
/// The recipient is only resolved once the input has passed validation.
pub fn seal<K>(
    raw: RawInput,
    recipient: K,
    required_payout_prefix: Option<&str>,
) -> Result<String, RecoveryError>
where
    K: FnOnce() -> Result<SignedPublicKey, KeyError>,
{
    let request = RecoveryRequest::validate(raw, required_payout_prefix)?;
    log::info!("Recovery request validated");

    let recipient = recipient().map_err(RecoveryError::Encryption)?;
    let armor =
        encrypt_message(&request.to_plaintext(), &recipient).map_err(RecoveryError::Encryption)?;

    log::info!("Recovery request encrypted ({} bytes armored)", armor.len());
    Ok(armor)
}

/// Run one interactive session
///
/// Returns the armored block on success. The outcome has already been shown
/// to the operator when this returns.
pub fn run<R, W, K>(
    reader: &mut R,
    writer: &mut W,
    recipient: K,
    required_payout_prefix: Option<&str>,
) -> Result<String, RecoveryError>
where
    R: BufRead,
    W: Write,
    K: FnOnce() -> Result<SignedPublicKey, KeyError>,
{
    let outcome = prompt::collect(reader, writer)
        .map_err(RecoveryError::from)
        .and_then(|raw| seal(raw, recipient, required_payout_prefix));

    match &outcome {
        Ok(armor) => presenter::present_ciphertext(writer, armor)?,
        Err(e) => {
            log::info!("Recovery request rejected");
            presenter::present_error(writer, e)?;
        }
    }

    prompt::wait_for_acknowledgment(reader, writer)?;
    outcome
}
