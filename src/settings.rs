//! Game configuration and variant presets
//!
//! The classic and arcade variants share one simulation; everything that
//! differs between them lives here. Persisted as JSON (file on native,
//! LocalStorage on web).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::SweepProfile;

/// Variant presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Single miss ends the run, symmetric net swing, no bonus stacks
    Classic,
    /// Lives, three-phase swing, bonus stacks
    #[default]
    Arcade,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Arcade => "Arcade",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "simple" => Some(Variant::Classic),
            "arcade" | "mobile" => Some(Variant::Arcade),
            _ => None,
        }
    }
}

/// Settings validation/parsing failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("settings file could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("canvas must be non-empty (got {width}x{height})")]
    EmptyCanvas { width: f32, height: f32 },
    #[error("ground height {ground} leaves no road band on a {height}px canvas")]
    NoRoadBand { ground: f32, height: f32 },
    #[error("sweep duration must be positive (got {0}ms)")]
    SweepDuration(f64),
    #[error("lives model needs at least one starting life")]
    NoLives,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: Variant,

    // === Geometry (read at session start, never mutated by the core) ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub ground_height: f32,

    // === Sweep ===
    pub sweep_duration_ms: f64,
    pub sweep_profile: SweepProfile,

    // === Rules ===
    /// When false a single missed paper ends the run
    pub has_lives_model: bool,
    pub starting_lives: u8,
    pub bonus_targets_enabled: bool,

    /// Gameplay RNG seed
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_variant(Variant::default())
    }
}

impl Settings {
    /// Create settings from a variant preset
    pub fn from_variant(variant: Variant) -> Self {
        let mut settings = Self {
            variant,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_height: GROUND_HEIGHT,
            sweep_duration_ms: SWEEP_DURATION_MS,
            sweep_profile: SweepProfile::ThreePhase,
            has_lives_model: true,
            starting_lives: STARTING_LIVES,
            bonus_targets_enabled: true,
            seed: 0x5eed_cafe,
        };
        settings.apply_variant(variant);
        settings
    }

    /// Apply a variant preset (updates the rule fields only)
    pub fn apply_variant(&mut self, variant: Variant) {
        self.variant = variant;
        match variant {
            Variant::Classic => {
                self.sweep_profile = SweepProfile::Triangular;
                self.has_lives_model = false;
                self.bonus_targets_enabled = false;
            }
            Variant::Arcade => {
                self.sweep_profile = SweepProfile::ThreePhase;
                self.has_lives_model = true;
                self.starting_lives = self.starting_lives.max(1);
                self.bonus_targets_enabled = true;
            }
        }
    }

    /// Top of the ground band
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.canvas_height - self.ground_height
    }

    /// Lowest y the vehicle may reach
    #[inline]
    pub fn vehicle_max_y(&self) -> f32 {
        (self.ground_y() - VEHICLE_HEIGHT + VEHICLE_GROUND_OVERLAP).max(VEHICLE_MIN_Y)
    }

    /// Vertical band targets spawn in (`min..max`)
    #[inline]
    pub fn spawn_band(&self) -> (f32, f32) {
        (SPAWN_MARGIN, self.ground_y() - SPAWN_MARGIN)
    }

    /// Check geometry and rules for values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(SettingsError::EmptyCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        let (min_y, max_y) = self.spawn_band();
        if self.ground_height < 0.0 || max_y <= min_y {
            return Err(SettingsError::NoRoadBand {
                ground: self.ground_height,
                height: self.canvas_height,
            });
        }
        if !(self.sweep_duration_ms > 0.0) {
            return Err(SettingsError::SweepDuration(self.sweep_duration_ms));
        }
        if self.has_lives_model && self.starting_lives == 0 {
            return Err(SettingsError::NoLives);
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "paperCatcherSettings";

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let loaded = std::fs::read_to_string(path)
            .map_err(SettingsError::from)
            .and_then(|json| Self::from_json(&json));
        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings ({}): {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(err) => log::warn!("Ignoring stored settings: {}", err),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_presets() {
        let classic = Settings::from_variant(Variant::Classic);
        assert!(!classic.has_lives_model);
        assert!(!classic.bonus_targets_enabled);
        assert_eq!(classic.sweep_profile, SweepProfile::Triangular);

        let arcade = Settings::from_variant(Variant::Arcade);
        assert!(arcade.has_lives_model);
        assert_eq!(arcade.starting_lives, 3);
        assert!(arcade.bonus_targets_enabled);
        assert_eq!(arcade.sweep_profile, SweepProfile::ThreePhase);
    }

    #[test]
    fn test_geometry_from_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ground_y(), 450.0);
        assert_eq!(settings.vehicle_max_y(), 390.0);
        assert_eq!(settings.spawn_band(), (50.0, 400.0));
    }

    #[test]
    fn test_json_partial_fills_defaults() {
        let settings = Settings::from_json(r#"{"canvas_width": 1024.0, "seed": 7}"#).unwrap();
        assert_eq!(settings.canvas_width, 1024.0);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.canvas_height, CANVAS_HEIGHT);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{"canvas_width": 0.0}"#),
            Err(SettingsError::EmptyCanvas { .. })
        ));
        assert!(matches!(
            Settings::from_json(r#"{"ground_height": 560.0}"#),
            Err(SettingsError::NoRoadBand { .. })
        ));
        assert!(matches!(
            Settings::from_json(r#"{"sweep_duration_ms": 0.0}"#),
            Err(SettingsError::SweepDuration(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"starting_lives": 0}"#),
            Err(SettingsError::NoLives)
        ));
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(Variant::from_str("CLASSIC"), Some(Variant::Classic));
        assert_eq!(Variant::from_str("mobile"), Some(Variant::Arcade));
        assert_eq!(Variant::from_str("nope"), None);
    }
}
