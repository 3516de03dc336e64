//! CLI definitions for editing the character and boss lists

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum CharsCommand {
    /// Add a character to the list
    Add {
        /// Character name (e.g., "Tarragrue")
        name: String,

        /// Realm, written inline as `Name (Realm)`; omitted uses the file's default
        #[arg(short, long)]
        realm: Option<String>,

        /// Path to the character list
        #[arg(long, default_value = maunts::config::CHARACTERS_FILE)]
        file: PathBuf,
    },

    /// Remove a character from the list
    Remove {
        /// Character name
        name: String,

        /// Only remove the entry on this realm (all realms if not provided)
        #[arg(short, long)]
        realm: Option<String>,

        /// Path to the character list
        #[arg(long, default_value = maunts::config::CHARACTERS_FILE)]
        file: PathBuf,
    },

    /// List characters with their resolved realms
    List {
        /// Path to the character list
        #[arg(long, default_value = maunts::config::CHARACTERS_FILE)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum BossesCommand {
    /// Track a boss by its numeric ID
    Add {
        /// Boss ID (e.g., 52409)
        id: String,

        /// Boss name, kept as a comment next to the ID
        name: Vec<String>,

        /// Path to the boss list
        #[arg(long, default_value = maunts::config::BOSSES_FILE)]
        file: PathBuf,
    },

    /// Stop tracking a boss
    Remove {
        /// Boss ID
        id: String,

        /// Path to the boss list
        #[arg(long, default_value = maunts::config::BOSSES_FILE)]
        file: PathBuf,
    },

    /// List tracked boss IDs
    List {
        /// Path to the boss list
        #[arg(long, default_value = maunts::config::BOSSES_FILE)]
        file: PathBuf,
    },
}
