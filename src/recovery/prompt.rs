//! Console input collection

use std::io::{self, BufRead, Write};

use super::request::RawInput;

pub const CLAIMED_ADDRESS_PROMPT: &str = "Enter Claimed address including checksum: ";
pub const PAYOUT_ADDRESS_PROMPT: &str = "Enter Bech32 Payout address (including `iota` prefix): ";
pub const SEED_PROMPT: &str = "Enter Seed for address: ";
pub const EXIT_PROMPT: &str = "Press ENTER to exit...";

/// Prompt for and read the three fields in order
///
/// Fails on the first read error; nothing is validated here.
pub fn collect<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<RawInput> {
    let address = read_field(reader, writer, CLAIMED_ADDRESS_PROMPT)?;
    let payout = read_field(reader, writer, PAYOUT_ADDRESS_PROMPT)?;
    let seed = read_field(reader, writer, SEED_PROMPT)?;

    Ok(RawInput {
        address,
        payout,
        seed,
    })
}

/// Print `prompt` and read one line
///
/// Line feeds are removed; every other character, including `\r` and
/// surrounding spaces, is kept as typed. A line that is not terminated by a
/// line feed is reported as `UnexpectedEof`.
pub fn read_field<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    if !line.ends_with('\n') {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "unexpected end of input",
        ));
    }

    Ok(line.replace('\n', ""))
}

/// Print the exit prompt and block until a line (or end of input) arrives
pub fn wait_for_acknowledgment<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "{}", EXIT_PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    if let Err(e) = reader.read_line(&mut line) {
        log::debug!("Ignoring read error while waiting for exit: {}", e);
    }
    Ok(())
}
