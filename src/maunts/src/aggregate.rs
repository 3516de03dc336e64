//! Kill aggregation, per character and across characters

use crate::character::{BossRecord, CharacterRecord};
use crate::error::MauntsError;
use crate::progress::CharacterProgress;
use std::collections::BTreeMap;

/// Store a character's achievement points and tracked boss kills
///
/// Bosses are matched on numeric ID and stored under their display name. If
/// the payload repeats a name, the later boss wins. Kill counts are only
/// checked for tracked bosses.
pub fn record_progress(
    character: &mut CharacterRecord,
    progress: &CharacterProgress,
    tracked_ids: &[String],
) -> Result<(), MauntsError> {
    character.achievement_points = progress.achievement_points;

    let tracked: Vec<i64> = tracked_ids
        .iter()
        .filter_map(|id| id.parse::<i64>().ok())
        .collect();

    for boss in progress.bosses() {
        if !tracked.contains(&boss.id) {
            continue;
        }

        let invalid = |field: &'static str, value: &serde_json::Value| MauntsError::InvalidKills {
            character: character.label(),
            boss: boss.name.clone(),
            field,
            value: value.to_string(),
        };

        let record = BossRecord {
            name: boss.name.clone(),
            normal_kills: boss
                .normal_kills()
                .ok_or_else(|| invalid("normalKills", &boss.normal_kills))?,
            heroic_kills: boss
                .heroic_kills()
                .ok_or_else(|| invalid("heroicKills", &boss.heroic_kills))?,
        };

        tracing::debug!(
            "{}: {} ({}-{})",
            character.label(),
            record.name,
            record.normal_kills,
            record.heroic_kills
        );

        if character.bosses.insert(record.name.clone(), record).is_some() {
            tracing::warn!(
                "{} reported {} twice, keeping the last entry",
                character.label(),
                boss.name
            );
        }
    }

    Ok(())
}

/// Sum kills per boss name over all characters
pub fn total_kills(characters: &[CharacterRecord]) -> BTreeMap<String, BossRecord> {
    let mut totals: BTreeMap<String, BossRecord> = BTreeMap::new();

    for character in characters {
        for (name, kills) in &character.bosses {
            totals
                .entry(name.clone())
                .or_insert_with(|| BossRecord::new(name.clone()))
                .accumulate(kills);
        }
    }

    totals
}
