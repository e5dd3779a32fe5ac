//! Physics tuning
//!
//! Every constant the character simulation uses lives here, with units,
//! so tests and mods can substitute values without touching the
//! resolution logic. Settings can be overridden from a RON file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable physics constants. Units are pixels and seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Downward acceleration applied every tick (pixels/second^2)
    pub gravity: f32,
    /// Falling speed cap (pixels/second)
    pub terminal_velocity: f32,
    /// Jump take-off strength (pixels/second^2).
    ///
    /// Take-off velocity is `-jump_impulse * dt`, so effective jump height
    /// depends on the measured tick delta. Tuned for the 16 ms tick and
    /// fragile at other tick rates.
    pub jump_impulse: f32,
    /// Upward velocity added per tick while the jump key stays held and
    /// the character is still rising (pixels/second)
    pub jump_hold_boost: f32,
    /// Horizontal velocity added per tick of held directional input
    /// (pixels/second)
    pub run_acceleration: f32,
    /// Per-tick multiplicative decay of horizontal velocity
    pub inertia: f32,
    /// Horizontal speeds below this magnitude snap to zero to avoid
    /// perpetual creep (pixels/second)
    pub rest_threshold: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: 500.0,
            terminal_velocity: 200.0,
            jump_impulse: 10_000.0,
            jump_hold_boost: 4.0,
            run_acceleration: 10.0,
            inertia: 0.9,
            rest_threshold: 1.0,
        }
    }
}

/// Error type for settings loading
#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SettingsError {
    fn from(e: ron::error::SpannedError) -> Self {
        SettingsError::ParseError(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::ParseError(e) => write!(f, "Parse error: {}", e),
            SettingsError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl PhysicsSettings {
    /// Load settings from a RON file. Omitted fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        let settings: Self = ron::from_str(&text)?;
        settings.validate().map_err(SettingsError::ValidationError)?;
        Ok(settings)
    }

    /// Load from `path` if it exists, otherwise use the built-in defaults.
    ///
    /// A missing file is normal configuration; a malformed one is fatal.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), String> {
        let fields = [
            ("gravity", self.gravity),
            ("terminal_velocity", self.terminal_velocity),
            ("jump_impulse", self.jump_impulse),
            ("jump_hold_boost", self.jump_hold_boost),
            ("run_acceleration", self.run_acceleration),
            ("inertia", self.inertia),
            ("rest_threshold", self.rest_threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(format!("{} is not finite ({})", name, value));
            }
        }
        if !(0.0..=1.0).contains(&self.inertia) {
            return Err(format!("inertia must be within 0..=1 ({})", self.inertia));
        }
        Ok(())
    }
}
