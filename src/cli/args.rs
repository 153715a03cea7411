//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "iota-recovery-tool",
    version,
    about = "IOTA Recovery Tool - encrypts a claimed-address recovery request for out-of-band submission",
    long_about = None
)]
pub struct Cli {
    /// Config file path (overrides RECOVERY_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Armored recovery recipient public key (overrides config)
    #[arg(long, global = true, conflicts_with = "recipient_file")]
    pub recipient: Option<String>,

    /// File holding the recovery recipient public key (overrides config)
    #[arg(long, global = true)]
    pub recipient_file: Option<String>,

    /// Required bech32 prefix for the payout address, e.g. iota (overrides config)
    #[arg(long, global = true)]
    pub payout_prefix: Option<String>,

    /// Defaults to `recover` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactively collect, validate and encrypt a recovery request
    Recover,

    /// Generate a new recovery identity (OpenPGP secret key file)
    Keygen {
        /// Where to write the secret key; the public key goes to <OUTPUT>.pub.asc
        #[arg(short, long)]
        output: PathBuf,

        /// User ID bound to the generated key
        #[arg(long, default_value = crate::crypto::keys::DEFAULT_USER_ID)]
        user_id: String,
    },

    /// Decrypt an armored recovery request
    Decrypt {
        /// Armored OpenPGP secret key file
        #[arg(short, long)]
        identity: PathBuf,

        /// File containing the armored block (reads stdin when omitted)
        #[arg(short = 'f', long)]
        input: Option<PathBuf>,
    },

    /// Initialize or manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize configuration file with defaults
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
