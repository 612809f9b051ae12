mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::*;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "ascend=debug,ascend_cli=debug"
    } else {
        "ascend=warn,ascend_cli=warn"
    };

    // Logs go to stderr so prompts and results on stdout stay clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            commands::menu::handle()?;
        }

        Commands::Calc {
            champions,
            show_champion_cost,
        } => {
            commands::calc::handle(&champions, show_champion_cost)?;
        }

        Commands::Configure {
            show_champion_cost,
            show,
        } => {
            commands::configure::handle(show_champion_cost, show)?;
        }
    }

    Ok(())
}
