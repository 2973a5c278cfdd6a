//! Command-line interface definitions
//!
//! Kept in the library so `xtask` can generate the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::theme::ThemeMode;

#[cfg(feature = "release")]
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("LITMD_BUILD_DATE"), ")");

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("LITMD_BUILD_DATE"),
    " ",
    env!("VERGEN_GIT_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "litmd", version = VERSION)]
#[command(about = "Decode escaped string literals and preview them as Markdown")]
#[command(
    long_about = "Paste a string literal full of escape sequences (\\n, \\t, \\\", ...) and \
see it as the Markdown it encodes. Without a subcommand the interactive viewer opens."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color theme (overrides the config file)
    #[arg(long, value_enum, global = true, value_name = "MODE")]
    pub theme: Option<ThemeMode>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the input text comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Escaped text; `-` reads standard input (use `--` before text starting with `-`)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive viewer (default)
    View {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the decoded text
    Decode {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the decoded text rendered as Markdown
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Disable colors and styles
        #[arg(long)]
        no_color: bool,
    },

    /// Copy the decoded text to the clipboard
    Copy {
        #[command(flatten)]
        input: InputArgs,

        /// Copy the text as given instead of the decoded text
        #[arg(long)]
        raw: bool,
    },

    /// Save the decoded text as a Markdown file
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Name substituted into the filename template
        #[arg(short = 'o', long = "name", value_name = "NAME")]
        name: Option<String>,

        /// Target directory (defaults to the configured one)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Save the text as given instead of the decoded text
        #[arg(long)]
        raw: bool,
    },

    /// List the built-in quick examples
    Examples {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Open the config file in $EDITOR
    Edit,
    /// Add missing fields to the config file
    Migrate {
        /// Apply without asking
        #[arg(short, long)]
        yes: bool,
    },
}
