//! User settings persisted as TOML in the platform config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use fiber_state::{DEFAULT_ITEMS_PER_PAGE, ThemeMode};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Persisted settings. Every field falls back to its default when missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub clock: ClockSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Rows per page in every paginated list.
    pub items_per_page: usize,
    pub theme: ThemeMode,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            theme: ThemeMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    /// Milliseconds between clock refreshes.
    pub tick_millis: u64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self { tick_millis: 1000 }
    }
}

impl ClockSettings {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults silently; an unreadable or corrupt
    /// one yields the defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "cannot read settings, using defaults");
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(path = %path.display(), %error, "invalid settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("write settings {}", path.display()))?;
        info!(path = %path.display(), "settings written");
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize settings")
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "FiberTrackPro", "FiberTrack")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}
