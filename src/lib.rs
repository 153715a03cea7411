//! IOTA Recovery Tool
//!
//! Collects a claimed legacy address, a bech32 payout address and a seed,
//! validates them and encrypts them to the recovery recipient as an armored
//! block for out-of-band submission.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod recovery;
pub mod validation;
