//! Command handlers for maunts CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod lists;
pub mod lookup;
