//! Copy orchestrator for clipboard operations.

use super::error::ClipboardError;
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;

/// Orchestrates clipboard copy operations using available tools.
///
/// Tools are tried in priority order; the first success wins. A failing tool
/// is logged and the next one is tried.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    /// Copy a text payload to the clipboard.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if self.tools.is_empty() {
            return Err(ClipboardError::UnsupportedPlatform);
        }

        let mut last_failure: Option<(&'static str, String)> = None;

        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => {
                    tracing::info!(tool = tool.name(), bytes = text.len(), "copied to clipboard");
                    return Ok(CopyResult::new(tool.method(), text.len()));
                }
                Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(message)) => {
                    tracing::warn!(tool = tool.name(), %message, "clipboard tool failed");
                    last_failure = Some((tool.name(), message));
                }
            }
        }

        match last_failure {
            Some((tool, message)) => Err(ClipboardError::ToolFailed { tool, message }),
            None => Err(ClipboardError::NoToolAvailable),
        }
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
