//! Recovery message encryption
//!
//! Manages the recovery recipient/identity and the armored envelope.

pub mod envelope;
pub mod keys;
