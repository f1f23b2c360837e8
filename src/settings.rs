//! Game settings and preferences
//!
//! Runtime configuration read from a JSON file. Every field has a default,
//! so partial files are fine.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::StorageError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Background stars (cosmetic)
    pub star_count: usize,

    // === Simulation ===
    /// Fixed RNG seed; None seeds from entropy once at start-up
    pub seed: Option<u64>,
    /// Host loop pacing in ticks per second
    pub tick_rate: u32,

    // === Storage ===
    /// High score file
    pub ledger_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            star_count: (SCREEN_WIDTH / 2.0) as usize,
            seed: None,
            tick_rate: TICKS_PER_SECOND,
            ledger_path: PathBuf::from("highscores.json"),
        }
    }
}

impl Settings {
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, StorageError> {
        let json = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
        let settings = serde_json::from_str(&json).map_err(|e| StorageError::json(path, e))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| StorageError::json(path, e))?;
        fs::write(path, json).map_err(|e| StorageError::io(path, e))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
