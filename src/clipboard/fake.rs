//! Scripted clipboard tool for unit tests.

use std::sync::{Arc, Mutex};

use super::result::CopyMethod;
use super::tool::{CopyTool, CopyToolError};

/// Tool that records every payload and answers with a fixed outcome.
pub(crate) struct FakeTool {
    pub method: CopyMethod,
    pub available: bool,
    pub outcome: Result<(), CopyToolError>,
    pub copied: Arc<Mutex<Vec<String>>>,
}

impl FakeTool {
    pub(crate) fn ok(method: CopyMethod) -> Self {
        Self {
            method,
            available: true,
            outcome: Ok(()),
            copied: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn failing(method: CopyMethod, message: &str) -> Self {
        Self {
            outcome: Err(CopyToolError::Failed(message.to_string())),
            ..Self::ok(method)
        }
    }

    pub(crate) fn unavailable(method: CopyMethod) -> Self {
        Self {
            available: false,
            ..Self::ok(method)
        }
    }
}

impl CopyTool for FakeTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        self.copied.lock().unwrap().push(text.to_string());
        self.outcome.clone()
    }
}
