//! CLI command implementations

pub mod config;
pub mod decrypt;
pub mod keygen;
pub mod recover;
