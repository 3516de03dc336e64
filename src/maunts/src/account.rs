//! Same-account heuristic
//!
//! Achievement points are account-wide, so characters from one account
//! normally agree. A difference usually means a character from another
//! account slipped into the list, though a stale armory profile can also
//! cause it.

use crate::character::CharacterRecord;

/// Question asked when the characters look like they span accounts
pub const MISMATCH_WARNING: &str =
    "There seems to be multiple accounts. Do you still want to continue?";

/// Characters whose achievement points differ from the first character's
pub fn account_mismatches(characters: &[CharacterRecord]) -> Vec<&CharacterRecord> {
    let Some(first) = characters.first() else {
        return Vec::new();
    };

    characters
        .iter()
        .filter(|c| c.achievement_points != first.achievement_points)
        .collect()
}

/// `N` or `n` stops the run; anything else carries on
pub fn is_abort_answer(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(name: &str, points: i64) -> CharacterRecord {
        let mut c = CharacterRecord::new(name, "Ravencrest");
        c.achievement_points = points;
        c
    }

    #[test]
    fn test_same_points_no_mismatch() {
        let chars = vec![character("A", 10), character("B", 10)];
        assert!(account_mismatches(&chars).is_empty());
    }

    #[test]
    fn test_mismatch_reported() {
        let chars = vec![character("A", 10), character("B", 10), character("C", 20)];
        let mismatches = account_mismatches(&chars);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].name, "C");
    }

    #[test]
    fn test_empty_list() {
        assert!(account_mismatches(&[]).is_empty());
    }

    #[test]
    fn test_abort_answers() {
        assert!(is_abort_answer("N"));
        assert!(is_abort_answer("n"));
        assert!(is_abort_answer(" n\n"));
        assert!(!is_abort_answer("Y"));
        assert!(!is_abort_answer(""));
        assert!(!is_abort_answer("no"));
    }
}
