//! # maunts
//!
//! Mount-run bookkeeping for World of Warcraft characters.
//!
//! This library provides functionality to:
//! - Read the character and boss lists (`chars.txt`, `bosses.txt`)
//! - Resolve `Name (Realm)` entries against a default realm
//! - Tally tracked boss kills per character and across characters
//! - Flag character lists that look like they span several accounts
//! - Estimate the odds of having seen a 1% mount drop by now
//!
//! ## Example
//!
//! ```
//! use maunts::{mount_chance, parse_character};
//!
//! let character = parse_character("Tarragrue (Area 52)", "Ravencrest");
//! assert_eq!(character.realm, "Area 52");
//!
//! assert_eq!(mount_chance(0), 0.0);
//! assert!(mount_chance(100) > 63.0);
//! ```

pub mod account;
pub mod aggregate;
pub mod character;
pub mod config;
pub mod error;
pub mod lookup;
pub mod progress;
pub mod report;
pub mod resolve;

// Re-export commonly used items
#[doc(inline)]
pub use account::{account_mismatches, is_abort_answer};
#[doc(inline)]
pub use aggregate::{record_progress, total_kills};
#[doc(inline)]
pub use character::{BossRecord, CharacterRecord};
#[doc(inline)]
pub use config::{parse_config, parse_line, read_config_file, tracked_boss_ids, ConfigLine};
#[doc(inline)]
pub use error::MauntsError;
#[doc(inline)]
pub use lookup::{run, Prompt, RunConfig, RunOutcome, RunState};
#[doc(inline)]
pub use progress::{CharacterProgress, ProgressionSource};
#[doc(inline)]
pub use report::{mount_chance, report_lines, DROP_RATE};
#[doc(inline)]
pub use resolve::{parse_character, realm_slug, resolve_characters, DEFAULT_REALM};
