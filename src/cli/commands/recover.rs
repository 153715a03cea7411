//! Recover command implementation

use std::io::{self, BufRead, Write};

use crate::config::{load_config, ConfigOverrides};
use crate::crypto::keys::load_recipient;
use crate::recovery::{self, presenter, prompt};

/// Run the interactive recovery session on the console
///
/// Every outcome is reported on stdout and followed by the exit prompt, so
/// this only fails when the console itself cannot be written.
pub fn recover(overrides: ConfigOverrides) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock(), overrides)
}

/// Console-independent body of [`recover`]
pub fn run<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    overrides: ConfigOverrides,
) -> io::Result<()> {
    let config = match load_config(None, overrides) {
        Ok(config) => config,
        Err(e) => {
            presenter::present_error(writer, &e)?;
            return prompt::wait_for_acknowledgment(reader, writer);
        }
    };

    let required_prefix = config.payout.required_prefix.clone();
    match recovery::run(
        reader,
        writer,
        || load_recipient(&config),
        required_prefix.as_deref(),
    ) {
        Ok(_) => log::info!("Recovery session finished"),
        Err(e) => log::debug!("Recovery session failed: {}", e),
    }

    Ok(())
}
