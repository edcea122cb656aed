//! Settings persistence
//!
//! JSON under the user's local data directory, written through a temp
//! file and a rename so a crash never leaves a half-written file behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, Offset};
use heliomap_core::settings::HomeSettings;
use heliomap_core::sun::ClockStyle;
use serde::{Deserialize, Serialize};

/// Everything the terminal front-end persists
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredSettings {
    /// Home location and overlay preference
    pub home: HomeSettings,
    /// Sun report clock style
    pub style: ClockStyle,
}

impl StoredSettings {
    /// First-run settings: the reference defaults with the timezone
    /// taken from the system clock
    pub fn detected() -> Self {
        let offset_secs = Local::now().offset().fix().local_minus_utc();
        let home = HomeSettings {
            timezone_half_hours: (offset_secs / 1800).clamp(-24, 24) as i8,
            ..HomeSettings::default()
        };
        Self {
            home,
            style: ClockStyle::H24,
        }
    }
}

/// Resolved settings file location
pub struct Paths {
    pub settings_path: PathBuf,
}

/// Resolve the project data directory, creating it if needed
pub fn project_paths() -> Result<Paths> {
    let dirs = directories::ProjectDirs::from("com", "heliomap", "Heliomap")
        .context("could not resolve a home directory")?;
    let dir = dirs.data_local_dir();
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(Paths {
        settings_path: dir.join("settings.json"),
    })
}

/// Load settings, falling back to detected defaults when the file is
/// missing, unreadable or out of range
pub fn load_settings(path: &Path) -> StoredSettings {
    if let Ok(text) = fs::read_to_string(path) {
        match serde_json::from_str::<StoredSettings>(&text) {
            Ok(stored) if stored.home.validate().is_ok() => return stored,
            Ok(_) => log::warn!("stored settings out of range, using defaults"),
            Err(err) => log::warn!("could not parse {}: {err}", path.display()),
        }
    }
    StoredSettings::detected()
}

/// Save settings atomically
pub fn save_settings(path: &Path, settings: &StoredSettings) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let data = serde_json::to_vec_pretty(settings)?;
    fs::write(&tmp, data).with_context(|| format!("writing {}", tmp.display()))?;
    atomic_rename(&tmp, path)?;
    Ok(())
}

/// Best-effort atomic replace on the same filesystem
fn atomic_rename(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        let _ = fs::remove_file(to);
    }
    fs::rename(from, to).with_context(|| format!("renaming {}", from.display()))?;
    Ok(())
}
