//! Line-oriented list files (`chars.txt`, `bosses.txt`)
//!
//! Both files share one format: `#` starts a comment that runs to the end
//! of the line, blank lines are skipped, and a `realm=<name>` line changes
//! the default realm for the character entries that follow it.

use crate::error::MauntsError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Default file holding the characters to look up
pub const CHARACTERS_FILE: &str = "chars.txt";

/// Default file holding the tracked boss IDs
pub const BOSSES_FILE: &str = "bosses.txt";

const REALM_DIRECTIVE: &str = "realm=";

/// One meaningful line of a list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLine {
    /// A plain entry (character or boss ID), comment stripped and trimmed
    Entry(String),
    /// `realm=<value>` directive
    Realm(String),
}

/// Parse the contents of a list file
///
/// Malformed lines are not rejected; they come back as literal entries.
pub fn parse_config(text: &str) -> Vec<ConfigLine> {
    text.lines().filter_map(parse_line).collect()
}

/// Parse a single line; `None` for blank and comment-only lines
pub fn parse_line(line: &str) -> Option<ConfigLine> {
    let content = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };
    let content = content.trim();

    if content.is_empty() {
        return None;
    }

    if let Some(realm) = content.strip_prefix(REALM_DIRECTIVE) {
        return Some(ConfigLine::Realm(realm.trim().to_string()));
    }

    Some(ConfigLine::Entry(content.to_string()))
}

/// Read and parse a list file
pub fn read_config_file(path: &Path) -> Result<Vec<ConfigLine>, MauntsError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MauntsError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => MauntsError::Io(e),
    })?;

    let lines = parse_config(&text);
    tracing::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Boss IDs from a parsed `bosses.txt`
///
/// Non-numeric IDs are kept as-is; they simply never match a boss.
pub fn tracked_boss_ids(lines: &[ConfigLine]) -> Vec<String> {
    let mut ids = Vec::new();

    for line in lines {
        match line {
            ConfigLine::Entry(id) => {
                if id.parse::<i64>().is_err() {
                    tracing::warn!("Boss ID '{}' is not numeric and will never match", id);
                }
                ids.push(id.clone());
            }
            ConfigLine::Realm(realm) => {
                tracing::warn!("Ignoring realm={} in boss list", realm);
            }
        }
    }

    if ids.is_empty() {
        tracing::warn!("No boss IDs configured, the report will be empty");
    }

    ids
}
