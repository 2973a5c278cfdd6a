//! Clipboard writer
//!
//! Copies a text payload to the system clipboard by piping it into the
//! platform's clipboard tool (pbcopy on macOS; wl-copy, xclip or xsel on
//! Linux). Tools are tried in priority order until one succeeds.

mod copy;
mod error;
#[cfg(test)]
pub(crate) mod fake;
mod result;
mod tool;
mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};
pub use tools::{platform_tools, CommandTool};

/// Copy `text` to the clipboard with the platform's tools.
pub fn copy_text(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}
