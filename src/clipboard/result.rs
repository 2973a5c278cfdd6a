//! Copy operation results and method identifiers.

use humansize::{format_size, DECIMAL};

/// The result of a successful clipboard copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyResult {
    /// Tool that performed the copy
    pub method: CopyMethod,
    /// Payload size in bytes (UTF-8)
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(method: CopyMethod, size_bytes: usize) -> Self {
        Self { method, size_bytes }
    }

    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        format!(
            "Copied {} to clipboard via {}",
            format_size(self.size_bytes, DECIMAL),
            self.method.name()
        )
    }
}

/// Which tool was used for the copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux Wayland
    WlCopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
}

impl CopyMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::WlCopy => "wl-copy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
        }
    }
}
