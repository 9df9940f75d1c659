//! Game settings and preferences
//!
//! Read once at startup from `shark_game.json` in the working directory.
//! Every field is optional; anything missing keeps its default. Settings
//! never fail startup: a missing or unreadable file just means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Smallest and largest accepted window scale
const SCALE_RANGE: (f32, f32) = (0.5, 3.0);

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the sprite PNGs
    pub assets_dir: PathBuf,
    /// Window size multiplier over the 800x600 viewport
    pub window_scale: f32,

    // === HUD ===
    /// Draw the on-screen joystick
    pub show_joystick: bool,
    /// Show FPS counter
    pub show_fps: bool,

    // === Visual Effects ===
    /// White screen flash on orca strikes and crab pinches
    pub flash_effects: bool,

    // === Audio ===
    /// Play eat, hit and game-over tones
    pub sound_effects: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    // === Accessibility ===
    /// Reduced motion (disables flashes)
    pub reduced_motion: bool,

    // === Display ===
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            window_scale: 1.0,

            // HUD
            show_joystick: true,
            show_fps: false,

            // Visual effects
            flash_effects: true,

            // Audio
            sound_effects: true,
            master_volume: 0.8,

            // Accessibility
            reduced_motion: false,

            vsync: true,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "shark_game.json";

    /// Effective screen flash (respects reduced_motion)
    pub fn effective_flash(&self) -> bool {
        self.flash_effects && !self.reduced_motion
    }

    /// Volume to play at: 0 when muted, otherwise clamped to 0.0 - 1.0
    pub fn effective_volume(&self) -> f32 {
        if !self.sound_effects || self.master_volume.is_nan() {
            return 0.0;
        }
        self.master_volume.clamp(0.0, 1.0)
    }

    /// Window scale clamped to the supported range (NaN maps to 1.0)
    pub fn effective_scale(&self) -> f32 {
        if self.window_scale.is_nan() {
            return 1.0;
        }
        self.window_scale.clamp(SCALE_RANGE.0, SCALE_RANGE.1)
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No {} found, using default settings", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {e}; using default settings", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {e}; using default settings", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("shark_game_settings_{}_{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("shark_game_settings_does_not_exist.json");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "show_fps": true, "window_scale": 2.0 }"#).unwrap();
        assert!(settings.show_fps);
        assert_eq!(settings.window_scale, 2.0);
        assert_eq!(settings.assets_dir, PathBuf::from("assets"));
        assert!(settings.show_joystick);
        assert!(settings.vsync);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let path = temp_file("bad.json", "{ not json");
        assert_eq!(Settings::load_from(&path), Settings::default());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_file("good.json", r#"{ "assets_dir": "art", "vsync": false }"#);
        let settings = Settings::load_from(&path);
        assert_eq!(settings.assets_dir, PathBuf::from("art"));
        assert!(!settings.vsync);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_reduced_motion_disables_flash() {
        let mut settings = Settings::default();
        assert!(settings.effective_flash());
        settings.reduced_motion = true;
        assert!(!settings.effective_flash());
    }

    #[test]
    fn test_volume() {
        let mut settings = Settings::from_json(r#"{ "master_volume": 1.7 }"#).unwrap();
        assert!(settings.sound_effects);
        assert_eq!(settings.effective_volume(), 1.0);
        settings.master_volume = -0.2;
        assert_eq!(settings.effective_volume(), 0.0);
        settings.master_volume = 0.5;
        settings.sound_effects = false;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_scale_is_clamped() {
        let mut settings = Settings::default();
        settings.window_scale = 10.0;
        assert_eq!(settings.effective_scale(), 3.0);
        settings.window_scale = 0.1;
        assert_eq!(settings.effective_scale(), 0.5);
        settings.window_scale = f32::NAN;
        assert_eq!(settings.effective_scale(), 1.0);
    }
}
