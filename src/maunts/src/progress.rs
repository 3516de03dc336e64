//! Character progression payload
//!
//! Mirrors the subset of the armory `?fields=progression` response that the
//! lookup needs. Fields not listed here are ignored. Kill counts stay raw
//! until a boss is known to be tracked, so odd data on untracked bosses
//! never fails a lookup.

use crate::character::CharacterRecord;
use crate::error::MauntsError;
use crate::resolve::realm_slug;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProgress {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub realm: Option<String>,
    pub achievement_points: i64,
    pub progression: Progression,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Progression {
    pub raids: Vec<Raid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Raid {
    pub bosses: Vec<ProgressBoss>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBoss {
    pub id: i64,
    pub name: String,
    /// Raw `normalKills`; `Null` when absent
    #[serde(default)]
    pub normal_kills: Value,
    /// Raw `heroicKills`; `Null` when absent
    #[serde(default)]
    pub heroic_kills: Value,
}

impl ProgressBoss {
    /// Required normal kill count, coerced to an integer
    pub fn normal_kills(&self) -> Option<u64> {
        kill_count(&self.normal_kills)
    }

    /// Heroic kill count; absent means zero
    pub fn heroic_kills(&self) -> Option<u64> {
        match &self.heroic_kills {
            Value::Null => Some(0),
            value => kill_count(value),
        }
    }
}

impl CharacterProgress {
    /// Parse a response body fetched for `character`
    pub fn from_json(character: &CharacterRecord, body: &str) -> Result<Self, MauntsError> {
        serde_json::from_str(body).map_err(|source| MauntsError::Decode {
            character: character.label(),
            source,
        })
    }

    /// Every boss of every raid, in payload order
    pub fn bosses(&self) -> impl Iterator<Item = &ProgressBoss> {
        self.progression.raids.iter().flat_map(|raid| raid.bosses.iter())
    }

    /// Whether the payload's own name and realm agree with the request
    ///
    /// Missing fields count as agreeing. Realms compare by slug, ignoring case.
    pub fn describes(&self, character: &CharacterRecord) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .map_or(true, |name| name.to_lowercase() == character.name.to_lowercase());
        let realm_ok = self.realm.as_deref().map_or(true, |realm| {
            realm_slug(realm).to_lowercase() == realm_slug(&character.realm).to_lowercase()
        });
        name_ok && realm_ok
    }
}

/// Accepts integers, non-negative integral floats and numeric strings
pub fn kill_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Where progression payloads come from
///
/// The CLI implements this over HTTP; tests use canned payloads.
pub trait ProgressionSource {
    fn fetch(&self, character: &CharacterRecord) -> Result<CharacterProgress, MauntsError>;
}
