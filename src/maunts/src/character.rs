//! Character and boss kill records

use std::collections::BTreeMap;

/// Kill counts for one boss
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BossRecord {
    /// Boss display name, as reported by the API
    pub name: String,
    pub normal_kills: u64,
    pub heroic_kills: u64,
}

impl BossRecord {
    pub fn new(name: impl Into<String>) -> Self {
        BossRecord {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Normal plus heroic kills, saturating at `u64::MAX`
    pub fn total_kills(&self) -> u64 {
        self.normal_kills.saturating_add(self.heroic_kills)
    }

    /// Add another record's kills to this one
    pub fn accumulate(&mut self, other: &BossRecord) {
        self.normal_kills = self.normal_kills.saturating_add(other.normal_kills);
        self.heroic_kills = self.heroic_kills.saturating_add(other.heroic_kills);
    }
}

/// A configured character and what was learned about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub realm: String,
    pub name: String,
    /// Tracked bosses keyed by display name
    pub bosses: BTreeMap<String, BossRecord>,
    pub achievement_points: i64,
}

impl CharacterRecord {
    pub fn new(name: impl Into<String>, realm: impl Into<String>) -> Self {
        CharacterRecord {
            realm: realm.into(),
            name: name.into(),
            bosses: BTreeMap::new(),
            achievement_points: 0,
        }
    }

    /// `Name (Realm)`, the form used in `chars.txt`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.realm)
    }

    /// Case-insensitive name and realm comparison
    pub fn same_character(&self, other: &CharacterRecord) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
            && self.realm.to_lowercase() == other.realm.to_lowercase()
    }
}
