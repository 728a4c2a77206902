use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use directories::ProjectDirs;

use crate::error::SettingsError;
use crate::models::settings::LayoutSettings;

const SETTINGS_FILE: &str = "layout.toml";

/// Reads and writes [`LayoutSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the per-user config file, e.g.
    /// `~/.config/daylayout/layout.toml` on Linux.
    pub fn for_user() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "DayLayout", "DayLayout")
            .ok_or_else(|| anyhow!("Could not determine a config directory"))?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(&self) -> Result<LayoutSettings> {
        if !self.path.exists() {
            log::info!(
                "No layout settings at {}, using defaults",
                self.path.display()
            );
            return Ok(LayoutSettings::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: LayoutSettings = toml::from_str(&content)
            .with_context(|| format!("failed to parse settings in {}", self.path.display()))?;
        Self::check(&settings)?;
        Ok(settings)
    }

    pub fn save(&self, settings: &LayoutSettings) -> Result<()> {
        Self::check(settings)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(settings).context("failed to encode settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }

    /// Resolve the configured IANA zone.
    pub fn time_zone(settings: &LayoutSettings) -> Result<Tz, SettingsError> {
        settings
            .timezone
            .parse::<Tz>()
            .map_err(|_| SettingsError::UnknownTimeZone(settings.timezone.clone()))
    }

    fn check(settings: &LayoutSettings) -> Result<(), SettingsError> {
        settings.validate().map_err(SettingsError::Invalid)?;
        Self::time_zone(settings)?;
        Ok(())
    }
}
