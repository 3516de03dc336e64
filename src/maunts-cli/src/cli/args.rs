//! Top-level CLI definitions

use super::{BossesCommand, CharsCommand};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "maunts")]
#[command(about = "Mount run tracker for World of Warcraft characters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub lookup: LookupArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the API region (eu, us, kr, tw)
        #[arg(long)]
        region: Option<String>,

        /// Set the realm used for characters without one
        #[arg(long)]
        realm: Option<String>,

        /// Set a full API base URL, overriding the region
        #[arg(long)]
        api_base: Option<String>,

        /// Set the request timeout in seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },

    /// Edit the character list (chars.txt)
    Chars {
        #[command(subcommand)]
        command: CharsCommand,
    },

    /// Edit the tracked boss list (bosses.txt)
    Bosses {
        #[command(subcommand)]
        command: BossesCommand,
    },
}

/// Options for the default lookup run
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Character list
    #[arg(long, default_value = maunts::config::CHARACTERS_FILE)]
    pub chars: PathBuf,

    /// Tracked boss IDs
    #[arg(long, default_value = maunts::config::BOSSES_FILE)]
    pub bosses: PathBuf,

    /// Realm for characters without one (uses configured default if not provided)
    #[arg(short, long)]
    pub realm: Option<String>,

    /// API region (uses configured default if not provided)
    #[arg(long)]
    pub region: Option<String>,

    /// Directory to write the report to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Also print each character's own kills
    #[arg(short, long)]
    pub breakdown: bool,

    /// Continue past the multiple-accounts warning without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Don't wait for Enter before exiting
    #[arg(long)]
    pub no_pause: bool,
}
