//! Mount drop odds and the kill report

use crate::character::{BossRecord, CharacterRecord};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Per-kill mount drop chance
pub const DROP_RATE: f64 = 0.01;

/// Percentage of players who would have the mount after `kills` attempts
///
/// `(1 - (1 - DROP_RATE)^kills) * 100`: the chance of at least one drop in
/// `kills` independent tries.
pub fn mount_chance(kills: u64) -> f64 {
    (1.0 - (1.0 - DROP_RATE).powf(kills as f64)) * 100.0
}

/// One report line for a boss
pub fn format_line(boss: &BossRecord) -> String {
    format!(
        "{} total kills: ({}-{}) - % of people with mount: {:.1}%",
        boss.name,
        boss.normal_kills,
        boss.heroic_kills,
        mount_chance(boss.total_kills())
    )
}

/// Report lines for combined totals, sorted by boss name
pub fn report_lines(totals: &BTreeMap<String, BossRecord>) -> Vec<String> {
    totals.values().map(format_line).collect()
}

/// One character's bosses, most killed first
pub fn character_breakdown(character: &CharacterRecord) -> Vec<String> {
    let mut bosses: Vec<&BossRecord> = character.bosses.values().collect();
    bosses.sort_by(|a, b| {
        b.total_kills()
            .cmp(&a.total_kills())
            .then_with(|| a.name.cmp(&b.name))
    });
    bosses.into_iter().map(format_line).collect()
}

/// `<dir>/<Name>.txt` for the first configured character
pub fn report_path(dir: &Path, character: &CharacterRecord) -> PathBuf {
    dir.join(format!("{}.txt", character.name))
}

/// Write the lines, each newline-terminated
pub fn write_report(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()
}
