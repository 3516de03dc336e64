//! The lookup run: read lists, fetch every character, check, report

use crate::account::{account_mismatches, is_abort_answer, MISMATCH_WARNING};
use crate::aggregate::{record_progress, total_kills};
use crate::character::CharacterRecord;
use crate::config::{read_config_file, tracked_boss_ids, BOSSES_FILE, CHARACTERS_FILE};
use crate::error::MauntsError;
use crate::progress::ProgressionSource;
use crate::report::{character_breakdown, report_lines, report_path, write_report};
use crate::resolve::{resolve_characters, DEFAULT_REALM};
use std::path::PathBuf;

/// Interactive questions asked during a run
pub trait Prompt {
    /// Ask a question and return the raw answer
    fn ask(&mut self, question: &str) -> Result<String, MauntsError>;

    /// Show a warning ahead of a question
    fn warn(&mut self, message: &str) -> Result<(), MauntsError>;

    /// Wait for the user to acknowledge
    fn pause(&mut self) -> Result<(), MauntsError>;
}

/// Inputs for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub chars_path: PathBuf,
    pub bosses_path: PathBuf,
    /// Realm for entries without one, until a `realm=` line says otherwise
    pub default_realm: String,
    /// Directory the report file is written to
    pub output_dir: PathBuf,
    /// Also print each character's own kills
    pub breakdown: bool,
    /// Continue past the account check without asking
    pub assume_yes: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            chars_path: PathBuf::from(CHARACTERS_FILE),
            bosses_path: PathBuf::from(BOSSES_FILE),
            default_realm: DEFAULT_REALM.to_string(),
            output_dir: PathBuf::from("."),
            breakdown: false,
            assume_yes: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed {
        report_path: PathBuf,
        lines: Vec<String>,
    },
    /// The user declined to continue after the account warning
    Aborted,
}

/// Everything a run knows about
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub tracked_boss_ids: Vec<String>,
    pub characters: Vec<CharacterRecord>,
}

impl RunState {
    /// Fetch and record every character in order
    ///
    /// The first failure ends the lookup.
    pub fn lookup<S: ProgressionSource>(&mut self, source: &S) -> Result<(), MauntsError> {
        for character in &mut self.characters {
            tracing::info!("Looking up {}", character.label());
            let progress = source.fetch(character)?;
            if !progress.describes(character) {
                tracing::warn!(
                    "Asked for {} but the armory answered for {} ({})",
                    character.label(),
                    progress.name.as_deref().unwrap_or("?"),
                    progress.realm.as_deref().unwrap_or("?")
                );
            }
            record_progress(character, &progress, &self.tracked_boss_ids)?;
        }
        Ok(())
    }
}

/// Ask whether to continue if the characters look like several accounts
///
/// Returns false when the user answered no.
pub fn confirm_same_account<P: Prompt>(
    characters: &[CharacterRecord],
    prompt: &mut P,
) -> Result<bool, MauntsError> {
    let mismatches = account_mismatches(characters);
    if mismatches.is_empty() {
        return Ok(true);
    }

    for character in &mismatches {
        tracing::info!(
            "{} has {} achievement points",
            character.label(),
            character.achievement_points
        );
    }

    prompt.warn(MISMATCH_WARNING)?;
    let answer = prompt.ask("Y/N: ")?;
    Ok(!is_abort_answer(&answer))
}

/// Run a full lookup
///
/// The report is written only after every character was fetched and the
/// account check passed.
pub fn run<S, P>(config: &RunConfig, source: &S, prompt: &mut P) -> Result<RunOutcome, MauntsError>
where
    S: ProgressionSource,
    P: Prompt,
{
    let char_lines = read_config_file(&config.chars_path)?;
    let boss_lines = read_config_file(&config.bosses_path)?;

    let mut state = RunState {
        tracked_boss_ids: tracked_boss_ids(&boss_lines),
        characters: resolve_characters(&char_lines, &config.default_realm),
    };

    if state.characters.is_empty() {
        return Err(MauntsError::NoCharacters);
    }

    state.lookup(source)?;

    if !config.assume_yes && !confirm_same_account(&state.characters, prompt)? {
        tracing::info!("Stopped after account warning");
        return Ok(RunOutcome::Aborted);
    }

    let first = &state.characters[0];
    println!("Kills for player {}", first.name);

    let lines = report_lines(&total_kills(&state.characters));
    for line in &lines {
        println!("{}", line);
    }

    if config.breakdown {
        for character in &state.characters {
            println!();
            println!("{}", character.label());
            for line in character_breakdown(character) {
                println!("  {}", line);
            }
        }
    }

    let path = report_path(&config.output_dir, first);
    write_report(&path, &lines)?;
    tracing::info!("Report written to {}", path.display());

    Ok(RunOutcome::Completed {
        report_path: path,
        lines,
    })
}
