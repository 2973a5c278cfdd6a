//! CopyTool trait and related error types.

use super::result::CopyMethod;

/// A tool that can copy text to the system clipboard.
///
/// Implementations wrap a specific OS tool (pbcopy, xclip, ...); tests
/// substitute their own.
pub trait CopyTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> CopyMethod;

    /// Human-readable name for error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is available on the system.
    ///
    /// Should be fast - typically checks if the binary exists.
    fn is_available(&self) -> bool;

    /// Try to copy text content to the clipboard.
    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}

/// Error from a specific tool operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// Tool not found on system
    NotFound,
    /// Tool execution failed
    Failed(String),
}

impl std::fmt::Display for CopyToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyToolError::NotFound => write!(f, "tool not found"),
            CopyToolError::Failed(message) => write!(f, "{}", message),
        }
    }
}
