//! litmd binary entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use litmd::cli::{Cli, Commands, ConfigCommands, InputArgs};
use litmd::logging;
use litmd::theme::Theme;

use commands::export::ExportOptions;

fn main() {
    let cli = Cli::parse();
    let theme = Theme::for_mode(cli.theme.unwrap_or_default().resolve());

    if let Err(e) = run(cli) {
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::View {
        input: InputArgs::default(),
    });

    // The viewer owns the terminal, so it logs to a file instead of stderr.
    let _log_guard = match &command {
        Commands::View { .. } => logging::init_file(cli.verbose),
        _ => {
            logging::init_stderr(cli.verbose);
            None
        }
    };

    let theme = cli.theme;
    match command {
        Commands::View { input } => commands::view::handle(&input, theme),
        Commands::Decode { input } => commands::decode::handle(&input),
        Commands::Render { input, no_color } => commands::render::handle(&input, no_color, theme),
        Commands::Copy { input, raw } => commands::copy::handle(&input, raw, theme),
        Commands::Export {
            input,
            name,
            dir,
            raw,
        } => commands::export::handle(&input, ExportOptions { name, dir, raw }, theme),
        Commands::Examples { json } => commands::examples::handle(json, theme),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(theme),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Edit => commands::config::handle_edit(theme),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes, theme),
        },
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
