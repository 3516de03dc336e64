//! List editing command handlers
//!
//! Handles the `chars` and `bosses` subcommands. Edits are line-level:
//! comments, blank lines and `realm=` directives are left where they are.

use crate::cli::{BossesCommand, CharsCommand};
use crate::config::Config;
use anyhow::{bail, Context, Result};
use maunts::{parse_character, parse_line, resolve_characters, CharacterRecord, ConfigLine};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Handle the chars command
pub fn handle_chars(command: CharsCommand) -> Result<()> {
    let config = Config::load()?;
    let default_realm = config.default_realm();

    match command {
        CharsCommand::Add { name, realm, file } => {
            if add_character_to_file(&file, &name, realm.as_deref(), default_realm)? {
                println!("Added {} to {}", name, file.display());
            } else {
                println!("{} is already in {}", name, file.display());
            }
        }
        CharsCommand::Remove { name, realm, file } => {
            let removed =
                remove_character_from_file(&file, &name, realm.as_deref(), default_realm)?;
            report_removed(removed, &name, &file);
        }
        CharsCommand::List { file } => {
            let text = read_list(&file)?;
            for label in character_labels(&text, default_realm) {
                println!("{}", label);
            }
        }
    }

    Ok(())
}

/// Handle the bosses command
pub fn handle_bosses(command: BossesCommand) -> Result<()> {
    match command {
        BossesCommand::Add { id, name, file } => {
            let name = name.join(" ");
            let name = (!name.trim().is_empty()).then_some(name.trim());
            if add_boss_to_file(&file, &id, name)? {
                println!("Now tracking {} in {}", id, file.display());
            } else {
                println!("{} is already in {}", id, file.display());
            }
        }
        BossesCommand::Remove { id, file } => {
            let removed = remove_boss_from_file(&file, &id)?;
            report_removed(removed, &id, &file);
        }
        BossesCommand::List { file } => {
            let text = read_list(&file)?;
            for (id, name) in boss_entries(&text) {
                match name {
                    Some(name) => println!("{:<10} {}", id, name),
                    None => println!("{}", id),
                }
            }
        }
    }

    Ok(())
}

fn report_removed(removed: usize, what: &str, file: &Path) {
    match removed {
        0 => println!("No entry for {} in {}", what, file.display()),
        1 => println!("Removed {} from {}", what, file.display()),
        n => println!("Removed {} entries for {} from {}", n, what, file.display()),
    }
}

fn read_list(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// File contents, or empty text when the file does not exist yet
fn read_list_or_empty(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn write_list(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

/// Add a character entry; false when it is already listed
pub fn add_character_to_file(
    path: &Path,
    name: &str,
    realm: Option<&str>,
    default_realm: &str,
) -> Result<bool> {
    let text = read_list_or_empty(path)?;
    match add_character(&text, name, realm, default_realm)? {
        Some(updated) => {
            write_list(path, &updated)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Remove matching character entries, returning how many went
pub fn remove_character_from_file(
    path: &Path,
    name: &str,
    realm: Option<&str>,
    default_realm: &str,
) -> Result<usize> {
    let text = read_list(path)?;
    let (updated, removed) = remove_character(&text, name, realm, default_realm);
    if removed > 0 {
        write_list(path, &updated)?;
    }
    Ok(removed)
}

/// Add a boss ID; false when it is already tracked
pub fn add_boss_to_file(path: &Path, id: &str, name: Option<&str>) -> Result<bool> {
    let text = read_list_or_empty(path)?;
    match add_boss(&text, id, name)? {
        Some(updated) => {
            write_list(path, &updated)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Remove a boss ID, returning how many lines went
pub fn remove_boss_from_file(path: &Path, id: &str) -> Result<usize> {
    let text = read_list(path)?;
    let (updated, removed) = remove_boss(&text, id);
    if removed > 0 {
        write_list(path, &updated)?;
    }
    Ok(removed)
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        bail!("Character name '{}' may only contain letters, digits and '_'", name);
    }
    Ok(())
}

fn validate_realm(realm: &str) -> Result<()> {
    let valid = !realm.is_empty()
        && realm
            .split(' ')
            .all(|word| !word.is_empty() && word.chars().all(is_realm_char));
    if !valid {
        bail!(
            "Realm '{}' may only contain letters, digits, apostrophes, '_', '-' and single spaces",
            realm
        );
    }
    Ok(())
}

fn is_realm_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '\'')
}

fn validate_boss_id(id: &str) -> Result<()> {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        bail!("Boss ID '{}' may only contain digits", id);
    }
    Ok(())
}

/// Append text as a new line, keeping whatever was there
fn append_line(text: &str, line: &str) -> String {
    let mut updated = text.to_string();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(line);
    updated.push('\n');
    updated
}

/// Rebuild the text without the lines `drop` selects
fn without_lines<F>(text: &str, mut drop: F) -> (String, usize)
where
    F: FnMut(&str) -> bool,
{
    let mut kept = String::with_capacity(text.len());
    let mut removed = 0;

    for line in text.lines() {
        if drop(line) {
            removed += 1;
        } else {
            kept.push_str(line);
            kept.push('\n');
        }
    }

    (kept, removed)
}

/// The realm that applies to an entry appended at the end of the file
fn realm_at_end(text: &str, default_realm: &str) -> String {
    text.lines()
        .filter_map(parse_line)
        .fold(default_realm.to_string(), |realm, line| match line {
            ConfigLine::Realm(new_realm) => new_realm,
            ConfigLine::Entry(_) => realm,
        })
}

/// Updated list text with the character appended, or `None` if already listed
pub fn add_character(
    text: &str,
    name: &str,
    realm: Option<&str>,
    default_realm: &str,
) -> Result<Option<String>> {
    let name = name.trim();
    let realm = realm.map(str::trim);
    validate_name(name)?;
    if let Some(realm) = realm {
        validate_realm(realm)?;
    }

    let candidate = match realm {
        Some(realm) => CharacterRecord::new(name, realm),
        None => CharacterRecord::new(name, realm_at_end(text, default_realm)),
    };

    let lines: Vec<ConfigLine> = text.lines().filter_map(parse_line).collect();
    if resolve_characters(&lines, default_realm)
        .iter()
        .any(|c| c.same_character(&candidate))
    {
        return Ok(None);
    }

    let entry = match realm {
        Some(realm) => format!("{} ({})", name, realm),
        None => name.to_string(),
    };
    Ok(Some(append_line(text, &entry)))
}

/// List text without the named character
///
/// Without a realm, the name is removed on every realm.
pub fn remove_character(
    text: &str,
    name: &str,
    realm: Option<&str>,
    default_realm: &str,
) -> (String, usize) {
    let name = name.trim().to_lowercase();
    let realm = realm.map(|r| r.trim().to_lowercase());
    let mut current_realm = default_realm.to_string();

    without_lines(text, |line| match parse_line(line) {
        Some(ConfigLine::Realm(new_realm)) => {
            current_realm = new_realm;
            false
        }
        Some(ConfigLine::Entry(entry)) => {
            let character = parse_character(&entry, &current_realm);
            character.name.to_lowercase() == name
                && realm
                    .as_deref()
                    .map_or(true, |r| character.realm.to_lowercase() == r)
        }
        None => false,
    })
}

/// `Name (Realm)` for every entry, in file order
pub fn character_labels(text: &str, default_realm: &str) -> Vec<String> {
    let lines: Vec<ConfigLine> = text.lines().filter_map(parse_line).collect();
    resolve_characters(&lines, default_realm)
        .iter()
        .map(CharacterRecord::label)
        .collect()
}

fn entry_id(line: &str) -> Option<String> {
    match parse_line(line) {
        Some(ConfigLine::Entry(id)) => Some(id),
        _ => None,
    }
}

/// Updated list text with the boss appended, or `None` if already tracked
///
/// The name is stored as a trailing comment.
pub fn add_boss(text: &str, id: &str, name: Option<&str>) -> Result<Option<String>> {
    let id = id.trim();
    validate_boss_id(id)?;
    if let Some(name) = name {
        if name.contains('#') || name.contains('\n') {
            bail!("Boss name '{}' may not contain '#' or line breaks", name);
        }
    }

    if text.lines().filter_map(entry_id).any(|existing| existing == id) {
        return Ok(None);
    }

    let entry = match name {
        Some(name) => format!("{} # {}", id, name.trim()),
        None => id.to_string(),
    };
    Ok(Some(append_line(text, &entry)))
}

/// List text without the boss ID
pub fn remove_boss(text: &str, id: &str) -> (String, usize) {
    let id = id.trim();
    without_lines(text, |line| entry_id(line).is_some_and(|existing| existing == id))
}

/// Tracked IDs with the comment beside them, in file order
pub fn boss_entries(text: &str) -> Vec<(String, Option<String>)> {
    text.lines()
        .filter_map(|line| {
            let id = entry_id(line)?;
            let name = line
                .split_once('#')
                .map(|(_, comment)| comment.trim().to_string())
                .filter(|comment| !comment.is_empty());
            Some((id, name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHARS: &str = "# mains\nAlpha\nBeta (Draenor)\n\nrealm=Area 52\nGamma # alt\n";

    #[test]
    fn test_add_character_appends() {
        let updated = add_character(CHARS, "Delta", None, "Ravencrest")
            .unwrap()
            .unwrap();
        assert_eq!(updated, format!("{}Delta\n", CHARS));
        assert_eq!(
            character_labels(&updated, "Ravencrest").last().map(String::as_str),
            Some("Delta (Area 52)")
        );
    }

    #[test]
    fn test_add_character_with_realm() {
        let updated = add_character("Alpha", "Beta", Some("Kel'Thuzad"), "Ravencrest")
            .unwrap()
            .unwrap();
        assert_eq!(updated, "Alpha\nBeta (Kel'Thuzad)\n");
    }

    #[test]
    fn test_add_character_skips_duplicates() {
        assert_eq!(add_character(CHARS, "alpha", Some("RAVENCREST"), "Ravencrest").unwrap(), None);
        assert_eq!(add_character(CHARS, "Gamma", None, "Ravencrest").unwrap(), None);
        // Same name on another realm is a different character
        assert!(add_character(CHARS, "Gamma", Some("Draenor"), "Ravencrest")
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_add_character_validates() {
        assert!(add_character("", "Bad Name", None, "Ravencrest").is_err());
        assert!(add_character("", "Bad(", None, "Ravencrest").is_err());
        assert!(add_character("", "", None, "Ravencrest").is_err());
        assert!(add_character("", "Good", Some("Two  Spaces"), "Ravencrest").is_err());
        assert!(add_character("", "Good", Some("Realm)"), "Ravencrest").is_err());
        assert!(add_character("", "Good", Some("Azjol-Nerub"), "Ravencrest").is_ok());
    }

    #[test]
    fn test_remove_character_keeps_comments() {
        let (updated, removed) = remove_character(CHARS, "beta", None, "Ravencrest");
        assert_eq!(removed, 1);
        assert_eq!(updated, "# mains\nAlpha\n\nrealm=Area 52\nGamma # alt\n");
    }

    #[test]
    fn test_remove_character_on_one_realm() {
        let text = "Alpha\nAlpha (Draenor)\n";

        let (updated, removed) = remove_character(text, "Alpha", Some("draenor"), "Ravencrest");
        assert_eq!(removed, 1);
        assert_eq!(updated, "Alpha\n");

        let (updated, removed) = remove_character(text, "Alpha", None, "Ravencrest");
        assert_eq!(removed, 2);
        assert_eq!(updated, "");
    }

    #[test]
    fn test_remove_character_follows_realm_directive() {
        let (_, removed) = remove_character(CHARS, "Gamma", Some("Ravencrest"), "Ravencrest");
        assert_eq!(removed, 0);
        let (_, removed) = remove_character(CHARS, "Gamma", Some("Area 52"), "Ravencrest");
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_character_labels() {
        assert_eq!(
            character_labels(CHARS, "Ravencrest"),
            vec!["Alpha (Ravencrest)", "Beta (Draenor)", "Gamma (Area 52)"]
        );
    }

    #[test]
    fn test_add_boss_keeps_name_as_comment() {
        let updated = add_boss("52409\n", "52530", Some(" Alysrazor "))
            .unwrap()
            .unwrap();
        assert_eq!(updated, "52409\n52530 # Alysrazor\n");
        assert_eq!(
            boss_entries(&updated),
            vec![
                ("52409".to_string(), None),
                ("52530".to_string(), Some("Alysrazor".to_string())),
            ]
        );
    }

    #[test]
    fn test_add_boss_skips_duplicates() {
        assert_eq!(add_boss("52409 # Ragnaros\n", "52409", None).unwrap(), None);
    }

    #[test]
    fn test_add_boss_validates() {
        assert!(add_boss("", "52x", None).is_err());
        assert!(add_boss("", "", None).is_err());
        assert!(add_boss("", "-1", None).is_err());
        assert!(add_boss("", "1", Some("a # b")).is_err());
    }

    #[test]
    fn test_remove_boss() {
        let text = "# Firelands\n52409 # Ragnaros\n52530\n";
        let (updated, removed) = remove_boss(text, "52409");
        assert_eq!(removed, 1);
        assert_eq!(updated, "# Firelands\n52530\n");

        let (unchanged, removed) = remove_boss(text, "1");
        assert_eq!(removed, 0);
        assert_eq!(unchanged, text);
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let chars = temp_dir.path().join("chars.txt");

        assert!(add_character_to_file(&chars, "Alpha", None, "Ravencrest").unwrap());
        assert!(add_character_to_file(&chars, "Beta", Some("Draenor"), "Ravencrest").unwrap());
        assert!(!add_character_to_file(&chars, "ALPHA", None, "Ravencrest").unwrap());
        assert_eq!(fs::read_to_string(&chars).unwrap(), "Alpha\nBeta (Draenor)\n");

        assert_eq!(
            remove_character_from_file(&chars, "Alpha", None, "Ravencrest").unwrap(),
            1
        );
        assert_eq!(fs::read_to_string(&chars).unwrap(), "Beta (Draenor)\n");
    }

    #[test]
    fn test_boss_file_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let bosses = temp_dir.path().join("bosses.txt");

        assert!(add_boss_to_file(&bosses, "52409", Some("Ragnaros")).unwrap());
        assert!(!add_boss_to_file(&bosses, "52409", None).unwrap());
        assert_eq!(fs::read_to_string(&bosses).unwrap(), "52409 # Ragnaros\n");

        let ids = maunts::read_config_file(&bosses).unwrap();
        assert_eq!(maunts::tracked_boss_ids(&ids), vec!["52409"]);

        assert_eq!(remove_boss_from_file(&bosses, "52409").unwrap(), 1);
        assert_eq!(fs::read_to_string(&bosses).unwrap(), "");
    }

    #[test]
    fn test_remove_from_missing_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("bosses.txt");
        assert!(remove_boss_from_file(&missing, "1").is_err());
        assert!(!missing.exists());
    }
}
