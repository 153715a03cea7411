//! Recovery request: the three operator-supplied fields

use std::fmt;

use super::RecoveryError;
use crate::validation::{validate_claimed_address, validate_payout_address, validate_seed};

const ADDRESS_LABEL: &str = "Address: ";
const PAYOUT_LABEL: &str = "Payout: ";
const SEED_LABEL: &str = "Seed: ";

/// Unvalidated operator input, in prompt order
#[derive(Clone, PartialEq, Eq)]
pub struct RawInput {
    pub address: String,
    pub payout: String,
    pub seed: String,
}

impl fmt::Debug for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawInput")
            .field("address", &self.address)
            .field("payout", &self.payout)
            .field("seed", &"<redacted>")
            .finish()
    }
}

/// Validated recovery request
///
/// Only obtainable through [`RecoveryRequest::validate`] or by parsing a
/// decrypted message.
#[derive(Clone, PartialEq, Eq)]
pub struct RecoveryRequest {
    address: String,
    payout: String,
    seed: String,
}

impl RecoveryRequest {
    /// Validate raw input
    ///
    /// Checks run in order (claimed address, payout address, seed) and stop
    /// at the first failure.
    pub fn validate(
        raw: RawInput,
        required_payout_prefix: Option<&str>,
    ) -> Result<Self, RecoveryError> {
        validate_claimed_address(&raw.address).map_err(RecoveryError::ClaimedAddress)?;

        let prefix = validate_payout_address(&raw.payout, required_payout_prefix)
            .map_err(RecoveryError::PayoutAddress)?;
        log::debug!("Payout address prefix: {}", prefix);

        validate_seed(&raw.seed).map_err(RecoveryError::Seed)?;

        Ok(Self {
            address: raw.address,
            payout: raw.payout,
            seed: raw.seed,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn payout(&self) -> &str {
        &self.payout
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Render the fixed plaintext layout
    pub fn to_plaintext(&self) -> String {
        format!(
            "{}{}\n{}{}\n{}{}\n",
            ADDRESS_LABEL, self.address, PAYOUT_LABEL, self.payout, SEED_LABEL, self.seed
        )
    }

    /// Parse a decrypted plaintext back into its fields
    ///
    /// The fields are not re-validated.
    pub fn parse_plaintext(plaintext: &str) -> Result<Self, RecoveryError> {
        let body = plaintext
            .strip_suffix('\n')
            .ok_or_else(|| RecoveryError::MalformedMessage("missing final newline".to_string()))?;

        let mut lines = body.split('\n');
        let address = labelled(lines.next(), ADDRESS_LABEL)?;
        let payout = labelled(lines.next(), PAYOUT_LABEL)?;
        let seed = labelled(lines.next(), SEED_LABEL)?;

        if lines.next().is_some() {
            return Err(RecoveryError::MalformedMessage(
                "unexpected trailing lines".to_string(),
            ));
        }

        Ok(Self {
            address,
            payout,
            seed,
        })
    }
}

impl fmt::Debug for RecoveryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoveryRequest")
            .field("address", &self.address)
            .field("payout", &self.payout)
            .field("seed", &"<redacted>")
            .finish()
    }
}

fn labelled(line: Option<&str>, label: &str) -> Result<String, RecoveryError> {
    line.and_then(|l| l.strip_prefix(label))
        .map(str::to_string)
        .ok_or_else(|| {
            RecoveryError::MalformedMessage(format!("expected line starting with '{}'", label))
        })
}
