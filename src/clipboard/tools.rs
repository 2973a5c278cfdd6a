//! Platform clipboard tools.
//!
//! Every supported tool reads the payload from stdin, so one
//! [`CommandTool`] type covers them all; only the program, its arguments and
//! the platform check differ.

use std::io::Write;
use std::process::{Command, Stdio};

use super::result::CopyMethod;
use super::tool::{CopyTool, CopyToolError};

/// A clipboard tool driven by piping text into an external program.
#[derive(Debug, Clone)]
pub struct CommandTool {
    method: CopyMethod,
    program: &'static str,
    args: &'static [&'static str],
}

impl CommandTool {
    /// macOS pasteboard.
    pub fn pbcopy() -> Self {
        Self {
            method: CopyMethod::Pbcopy,
            program: "pbcopy",
            args: &[],
        }
    }

    /// Wayland clipboard.
    pub fn wl_copy() -> Self {
        Self {
            method: CopyMethod::WlCopy,
            program: "wl-copy",
            args: &[],
        }
    }

    /// X11 clipboard via xclip.
    pub fn xclip() -> Self {
        Self {
            method: CopyMethod::Xclip,
            program: "xclip",
            args: &["-selection", "clipboard"],
        }
    }

    /// X11 clipboard via xsel.
    pub fn xsel() -> Self {
        Self {
            method: CopyMethod::Xsel,
            program: "xsel",
            args: &["--clipboard", "--input"],
        }
    }

    /// Check if the program is installed.
    fn tool_exists(&self) -> bool {
        Command::new("which")
            .arg(self.program)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn platform_supported(&self) -> bool {
        match self.method {
            CopyMethod::Pbcopy => cfg!(target_os = "macos"),
            CopyMethod::WlCopy | CopyMethod::Xclip | CopyMethod::Xsel => {
                cfg!(target_os = "linux")
            }
        }
    }
}

impl CopyTool for CommandTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.platform_supported() && self.tool_exists()
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CopyToolError::NotFound,
                _ => CopyToolError::Failed(e.to_string()),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| CopyToolError::Failed(e.to_string()))?;
            // stdin dropped here so the tool sees EOF
        }

        let output = child
            .wait_with_output()
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(CopyToolError::Failed(if stderr.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                stderr
            }))
        }
    }
}

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(CommandTool::pbcopy())]
    }

    #[cfg(target_os = "linux")]
    {
        linux_tools(std::env::var_os("WAYLAND_DISPLAY").is_some())
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Linux tools: wl-copy first under Wayland, last otherwise.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn linux_tools(wayland: bool) -> Vec<Box<dyn CopyTool>> {
    let x11: [Box<dyn CopyTool>; 2] = [Box::new(CommandTool::xclip()), Box::new(CommandTool::xsel())];
    let mut tools: Vec<Box<dyn CopyTool>> = Vec::with_capacity(3);
    if wayland {
        tools.push(Box::new(CommandTool::wl_copy()));
        tools.extend(x11);
    } else {
        tools.extend(x11);
        tools.push(Box::new(CommandTool::wl_copy()));
    }
    tools
}
