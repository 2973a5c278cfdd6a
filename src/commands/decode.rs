//! Decode command handler

use std::io::{self, Write};

use anyhow::Result;

use litmd::cli::InputArgs;

/// Print the decoded text, ending with exactly one newline.
pub fn handle(input: &InputArgs) -> Result<()> {
    let text = super::read_input(input, None)?;
    let decoded = litmd::decode(&text);

    let mut stdout = io::stdout().lock();
    stdout.write_all(decoded.as_bytes())?;
    if !decoded.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
