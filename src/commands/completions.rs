//! Shell completion generation

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use litmd::cli::Cli;

pub fn handle(shell: Shell) {
    let mut command = Cli::command();
    generate(shell, &mut command, "litmd", &mut io::stdout());
}
