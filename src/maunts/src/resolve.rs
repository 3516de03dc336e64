//! Character name and realm resolution
//!
//! Entries are either `Name` or `Name (Realm)`. Unqualified entries take the
//! default realm in effect at their position in the file.

use crate::character::CharacterRecord;
use crate::config::ConfigLine;

/// Realm used when neither settings nor the file name one
pub const DEFAULT_REALM: &str = "Ravencrest";

/// Parse one character entry
pub fn parse_character(line: &str, default_realm: &str) -> CharacterRecord {
    let Some(open) = line.find('(') else {
        return CharacterRecord::new(line.trim(), default_realm);
    };

    let name = line[..open].trim();
    let rest = &line[open + 1..];
    let realm = match rest.find(')') {
        Some(close) => rest[..close].trim(),
        None => rest.trim(),
    };

    if realm.is_empty() {
        CharacterRecord::new(name, default_realm)
    } else {
        CharacterRecord::new(name, realm)
    }
}

/// Resolve every entry of a parsed `chars.txt`, in file order
///
/// A `realm=` directive only affects the entries after it. Repeated
/// characters are kept; each one is looked up and counted.
pub fn resolve_characters(lines: &[ConfigLine], default_realm: &str) -> Vec<CharacterRecord> {
    let mut realm = default_realm.to_string();
    let mut characters: Vec<CharacterRecord> = Vec::new();

    for line in lines {
        match line {
            ConfigLine::Realm(new_realm) => {
                tracing::debug!("Default realm is now {}", new_realm);
                realm = new_realm.clone();
            }
            ConfigLine::Entry(entry) => {
                let character = parse_character(entry, &realm);
                if characters.iter().any(|c| c.same_character(&character)) {
                    tracing::warn!(
                        "{} is listed more than once, its kills will be counted again",
                        character.label()
                    );
                }
                characters.push(character);
            }
        }
    }

    characters
}

/// Realm as it appears in an API path (`Area 52` becomes `Area-52`)
pub fn realm_slug(realm: &str) -> String {
    realm.trim().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(s: &str) -> ConfigLine {
        ConfigLine::Entry(s.to_string())
    }

    #[test]
    fn test_parse_inline_realm() {
        let c = parse_character("Tarragrue (Area 52)", "Ravencrest");
        assert_eq!(c.name, "Tarragrue");
        assert_eq!(c.realm, "Area 52");
    }

    #[test]
    fn test_parse_default_realm() {
        let c = parse_character("Tarragrue", "Ravencrest");
        assert_eq!(c.name, "Tarragrue");
        assert_eq!(c.realm, "Ravencrest");
    }

    #[test]
    fn test_parse_without_space() {
        let c = parse_character("Tarragrue(Draenor)", "Ravencrest");
        assert_eq!(c.name, "Tarragrue");
        assert_eq!(c.realm, "Draenor");
    }

    #[test]
    fn test_parse_unclosed_paren() {
        let c = parse_character("Tarragrue (Draenor", "Ravencrest");
        assert_eq!(c.realm, "Draenor");
    }

    #[test]
    fn test_parse_empty_realm_uses_default() {
        let c = parse_character("Tarragrue ()", "Ravencrest");
        assert_eq!(c.name, "Tarragrue");
        assert_eq!(c.realm, "Ravencrest");
    }

    #[test]
    fn test_realm_directive_only_affects_later_entries() {
        let lines = vec![
            entry("First"),
            ConfigLine::Realm("Draenor".to_string()),
            entry("Second"),
            entry("Third (Area 52)"),
        ];

        let chars = resolve_characters(&lines, "Ravencrest");
        let realms: Vec<_> = chars.iter().map(|c| c.realm.as_str()).collect();
        assert_eq!(realms, vec!["Ravencrest", "Draenor", "Area 52"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let lines = vec![entry("Same"), entry("same (Ravencrest)")];
        let chars = resolve_characters(&lines, "Ravencrest");
        assert_eq!(chars.len(), 2);
    }

    #[test]
    fn test_realm_slug() {
        assert_eq!(realm_slug("Area 52"), "Area-52");
        assert_eq!(realm_slug("Ravencrest"), "Ravencrest");
        assert_eq!(realm_slug("Argent Dawn"), "Argent-Dawn");
    }
}
