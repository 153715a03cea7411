//! IOTA Recovery Tool CLI
//!
//! Without a subcommand the tool runs the interactive recovery session.

use clap::Parser;
use iota_recovery_tool::cli::args::{Cli, Commands, ConfigAction};
use iota_recovery_tool::cli::commands;
use iota_recovery_tool::config::ConfigOverrides;
use std::process;

fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Build config overrides from global arguments
    let overrides = ConfigOverrides {
        config_path: cli.config.clone(),
        recipient: cli.recipient.clone(),
        recipient_file: cli.recipient_file.clone(),
        payout_prefix: cli.payout_prefix.clone(),
    };

    let result: Result<(), Box<dyn std::error::Error>> =
        match cli.command.unwrap_or(Commands::Recover) {
            Commands::Recover => commands::recover::recover(overrides).map_err(Into::into),

            Commands::Keygen { output, user_id } => {
                commands::keygen::keygen(output, &user_id).map_err(Into::into)
            }

            Commands::Decrypt { identity, input } => {
                commands::decrypt::decrypt(identity, input).map_err(Into::into)
            }

            Commands::Config { action } => match action {
                ConfigAction::Init { force } => {
                    commands::config::init(overrides, force).map_err(Into::into)
                }
            },
        };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
