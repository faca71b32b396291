//! Game settings and preferences
//!
//! Persisted as a JSON file next to the binary. Everything has a default, so
//! a partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Tuning;
use crate::consts::{MAX_FRAME_DELTA, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Errors raised while loading or saving settings
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed but unusable values
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    /// Screen width in pixels (only the aspect ratio reaches the simulation)
    pub screen_width: u32,
    /// Screen height in pixels
    pub screen_height: u32,

    // === Session ===
    /// Seed for the decorative asteroid field
    pub seed: u64,
    /// Largest delta (seconds) handed to a single tick
    pub max_frame_delta: f32,

    // === HUD ===
    /// Log FPS statistics every stats window
    pub show_fps: bool,

    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            seed: 0x00C0_5305,
            max_frame_delta: MAX_FRAME_DELTA,

            show_fps: false,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Width over height; the on-screen window is ±aspect_ratio wide
    pub fn aspect_ratio(&self) -> f32 {
        self.screen_width as f32 / self.screen_height.max(1) as f32
    }

    /// Check display values and the nested tuning
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(SettingsError::Invalid(format!(
                "screen size must be non-zero, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if !(self.max_frame_delta.is_finite() && self.max_frame_delta > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "max_frame_delta must be positive, got {}",
                self.max_frame_delta
            )));
        }
        self.tuning.validate().map_err(SettingsError::Invalid)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("cosmos_guardian_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_default_aspect_ratio() {
        let settings = Settings::default();
        assert!((settings.aspect_ratio() - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_overrides() {
        let settings =
            Settings::from_json(r#"{ "screen_width": 1000, "screen_height": 1000 }"#).unwrap();
        assert_eq!(settings.aspect_ratio(), 1.0);
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "screen_height": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = Settings::from_json(r#"{ "tuning": { "enemy_fire_rate": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let path = temp_path("missing.json");
        let settings = Settings::load_or_default(&path).unwrap();
        assert_eq!(settings.seed, Settings::default().seed);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved.json");
        let settings = Settings {
            seed: 42,
            show_fps: true,
            ..Default::default()
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.seed, 42);
        assert!(loaded.show_fps);
        let _ = std::fs::remove_file(&path);
    }
}
