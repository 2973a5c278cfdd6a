//! litmd: decode escaped string literals and preview them as Markdown
//!
//! The core is [`decode`], a single left-to-right pass that replaces escape
//! sequences (`\n`, `\t`, `\"`, ...) with the characters they stand for. The
//! rest of the crate renders, copies and exports the result.
//!
//! ```
//! assert_eq!(litmd::decode("# Title\\nBody"), "# Title\nBody");
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod decode;
pub mod export;
pub mod logging;
pub mod markdown;
pub mod presets;
pub mod theme;
pub mod tui;
pub mod view;

pub use config::Config;
pub use decode::decode;
pub use view::ViewMode;
