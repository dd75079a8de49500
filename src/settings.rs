use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Returns the path to the settings file: `~/.config/monocle/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("monocle");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Theme the window and plot with the Srcery palette
    pub custom_palette: bool,

    /// Directory the open dialog starts in
    pub last_directory: Option<PathBuf>,

    // Display
    pub line_width: f32,
    pub show_grid: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            custom_palette: false,
            last_directory: None,
            line_width: 1.0,
            show_grid: true,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_json(&contents),
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn from_json(contents: &str) -> Self {
        match serde_json::from_str(contents) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Failed to parse settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match self.to_json() {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = AppSettings::from_json(r#"{ "custom_palette": true }"#);
        assert!(settings.custom_palette);
        assert_eq!(settings.line_width, 1.0);
        assert!(settings.show_grid);
        assert!(settings.last_directory.is_none());
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(AppSettings::from_json("{ nope"), AppSettings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = AppSettings {
            custom_palette: true,
            last_directory: Some(PathBuf::from("/tmp/recordings")),
            line_width: 2.5,
            show_grid: false,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(AppSettings::from_json(&json), settings);
    }

    #[test]
    fn test_palette_off_by_default() {
        assert!(!AppSettings::default().custom_palette);
    }
}
