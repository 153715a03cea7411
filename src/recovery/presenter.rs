//! Operator-facing output

use std::fmt::Display;
use std::io::{self, Write};

const SPACER_LINES: usize = 19;

const CUT_HERE: &str =
    "=================================CUT HERE=====================================";
const CUT_END: &str =
    "==============================================================================";
const INSTRUCTIONS: &str =
    "Send __only__ the following text to our community managers (via Discord or Email)";

/// Print the banner-wrapped armored block
pub fn present_ciphertext<W: Write>(writer: &mut W, armor: &str) -> io::Result<()> {
    // Push the typed seed off screen before the block is shown
    for _ in 0..SPACER_LINES {
        write!(writer, "\n##")?;
    }
    writeln!(writer, "\n\n{}\n", CUT_HERE)?;
    writeln!(writer, "{}", INSTRUCTIONS)?;
    write!(writer, "\n\n\n{}\n\n", armor)?;
    writeln!(writer, "\n\n{}\n", CUT_END)?;
    writer.flush()
}

/// Print a single error line
pub fn present_error<W: Write>(writer: &mut W, error: &dyn Display) -> io::Result<()> {
    writeln!(writer, "ERROR: {}", error)?;
    writer.flush()
}
