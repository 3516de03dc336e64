//! Lookup command handler
//!
//! The default action: fetch every character and report mount odds.

use crate::api::{ArmoryClient, Endpoint};
use crate::cli::LookupArgs;
use crate::config::Config;
use crate::prompt::ConsolePrompt;
use anyhow::{Context, Result};
use maunts::{Prompt, RunConfig, RunOutcome};
use std::process::ExitCode;
use std::time::Duration;

/// Combine command-line options with stored settings
///
/// Flags win over the config file, which wins over built-in defaults.
pub fn run_config(args: &LookupArgs, config: &Config) -> RunConfig {
    RunConfig {
        chars_path: args.chars.clone(),
        bosses_path: args.bosses.clone(),
        default_realm: args
            .realm
            .clone()
            .unwrap_or_else(|| config.default_realm().to_string()),
        output_dir: args.output_dir.clone(),
        breakdown: args.breakdown,
        assume_yes: args.yes,
    }
}

/// API endpoint for this run
///
/// A region given on the command line beats a configured API base.
pub fn endpoint(args: &LookupArgs, config: &Config) -> Endpoint {
    match (&args.region, config.api_base()) {
        (Some(region), _) => Endpoint::for_region(region),
        (None, Some(base)) => Endpoint::new(base),
        (None, None) => Endpoint::for_region(config.region()),
    }
}

fn timeout(args: &LookupArgs, config: &Config) -> Duration {
    Duration::from_secs(args.timeout.unwrap_or_else(|| config.timeout_secs()))
}

/// Handle the default lookup
pub fn handle(args: LookupArgs) -> Result<ExitCode> {
    let config = Config::load()?;
    let run_config = run_config(&args, &config);
    let client = ArmoryClient::new(endpoint(&args, &config), timeout(&args, &config));
    let mut prompt = ConsolePrompt::stdio(!args.no_pause);

    match maunts::run(&run_config, &client, &mut prompt) {
        Ok(RunOutcome::Completed { .. }) => {
            prompt.pause()?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(RunOutcome::Aborted) => Ok(ExitCode::FAILURE),
        Err(e) if e.is_config_not_found() => {
            println!("{}", e);
            prompt.pause()?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("Mount lookup failed"),
    }
}
