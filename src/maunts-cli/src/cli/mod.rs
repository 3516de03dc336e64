//! CLI argument definitions for maunts
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod args;
mod lists;

pub use args::{Cli, Commands, LookupArgs};
pub use lists::{BossesCommand, CharsCommand};
