//! FILENAME: core/persistence/src/lib.rs
//! Calculator Preference Storage
//!
//! Owns the on-disk representation of the persisted user preferences. The
//! engine only reads and writes the in-memory flags; where and how they are
//! stored is decided here.

mod error;

pub use error::PersistenceError;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default file name for the preference store, relative to wherever the
/// embedder keeps application data.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Whether the "long press for AC" tooltip on the clear button should
    /// still be shown. On from first launch until the user dismisses it.
    #[serde(default = "default_show_ac_tooltip")]
    pub show_ac_tooltip: bool,
}

fn default_show_ac_tooltip() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            show_ac_tooltip: true,
        }
    }
}

impl Preferences {
    /// Load preferences from `path`. A missing file is a first launch and
    /// yields the defaults.
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        if !path.exists() {
            log::debug!("no preference file at {:?}, using defaults", path);
            return Ok(Preferences::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Save preferences to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        log::debug!("saved preferences to {:?}", path);
        Ok(())
    }
}
