use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::TabBarSettings;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/tabstrip/settings.ron`.
pub fn settings_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("tabstrip").join("settings.ron"))
}

/// Reads and parses the settings file at `path`.
pub fn read_settings(path: &Path) -> anyhow::Result<TabBarSettings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    ron::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

/// Writes `settings` to `path`, creating parent directories.
pub fn write_settings(path: &Path, settings: &TabBarSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let serialized =
        ron::ser::to_string_pretty(settings, pretty).context("failed to serialize settings")?;
    fs::write(path, serialized).with_context(|| format!("failed to write {}", path.display()))
}

/// Loads settings from `path`, falling back to defaults on any error.
/// A missing file is not worth a warning; a broken one is.
pub fn load_settings_from(path: &Path) -> TabBarSettings {
    if !path.exists() {
        return TabBarSettings::default();
    }
    match read_settings(path) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("{err:#}; using default tab bar settings");
            TabBarSettings::default()
        }
    }
}
