mod api;
mod cli;
mod commands;
mod config;
mod prompt;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Configure {
            region,
            realm,
            api_base,
            timeout,
            show,
        }) => {
            let changes = commands::configure::ConfigChanges {
                region,
                realm,
                api_base,
                timeout,
            };
            commands::configure::handle(changes, show)?;
            Ok(ExitCode::SUCCESS)
        }

        Some(Commands::Chars { command }) => {
            commands::lists::handle_chars(command)?;
            Ok(ExitCode::SUCCESS)
        }

        Some(Commands::Bosses { command }) => {
            commands::lists::handle_bosses(command)?;
            Ok(ExitCode::SUCCESS)
        }

        None => commands::lookup::handle(cli.lookup),
    }
}

/// Log to stderr so report output on stdout stays clean
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "maunts=warn",
        1 => "maunts=info",
        _ => "maunts=debug",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
