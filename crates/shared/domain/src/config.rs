use crate::weapon::DEFAULT_WEAPON_NAME;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration for the `primer` binary.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrimerConfig {
    pub log: LogConfig,
    pub armory: ArmoryConfig,
}

/// Logging knobs handed to the logger builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    /// Optional module directives, e.g. `primer_store=trace`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when unset.
    pub dir: Option<PathBuf>,
    /// File lines as JSON objects; ignored without `dir`.
    pub json: bool,
    /// Compact lines on stderr.
    pub console: bool,
}

/// How the dictionary lesson equips and drives its army.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArmoryConfig {
    /// Fixed seed for reproducible attack rolls; OS entropy when unset.
    pub seed: Option<u64>,
    pub min_attacks: u32,
    pub max_attacks: u32,
    /// Name of the weapon handed to combatants without one.
    pub default_weapon: String,
}

// --- Default ---

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), filter: None, dir: None, json: false, console: true }
    }
}

impl Default for ArmoryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_attacks: 1,
            max_attacks: 3,
            default_weapon: DEFAULT_WEAPON_NAME.to_owned(),
        }
    }
}
