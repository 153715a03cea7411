//! Config command implementations

use std::path::PathBuf;

use crate::config::{
    default_config_path, save_config, ConfigError, ConfigOverrides, GlobalConfig,
    DEFAULT_RECIPIENT,
};

/// Initialize configuration file with the built-in recipient
pub fn init(overrides: ConfigOverrides, force: bool) -> Result<(), ConfigError> {
    let overrides = ConfigOverrides::from_env().merge(overrides);
    let path = match overrides.config_path {
        Some(p) => PathBuf::from(p),
        None => default_config_path()?,
    };

    if path.exists() && !force {
        return Err(ConfigError::Invalid(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let mut config = GlobalConfig::default();
    match (overrides.recipient, overrides.recipient_file) {
        (Some(key), _) => config.recipient.public_key = Some(key),
        (None, Some(file)) => config.recipient.public_key_file = Some(file),
        (None, None) => config.recipient.public_key = Some(DEFAULT_RECIPIENT.to_string()),
    }
    config.payout.required_prefix = overrides.payout_prefix;

    let path = save_config(&config, Some(&path))?;
    println!("✓ Configuration initialized");
    println!("  Config file: {}", path.display());

    Ok(())
}
