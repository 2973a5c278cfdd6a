//! Development tasks: `cargo run -p xtask -- <task>`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for litmd and its subcommands
    GenMan {
        /// Output directory
        #[arg(short, long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::GenMan { out } => gen_man(&out),
    }
}

fn gen_man(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let cmd = litmd::cli::Cli::command();
    clap_mangen::generate_to(cmd, out)
        .with_context(|| format!("Failed to write man pages to {}", out.display()))?;

    println!("Man pages written to {}", out.display());
    Ok(())
}
