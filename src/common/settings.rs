use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::common::base_visualizer::{DEFAULT_DELAY, DEFAULT_LEN, DEFAULT_RANGE};
use crate::common::enums::Algorithm;
use crate::common::error::{Result, VisualizerError};

pub const SETTINGS_FILE: &str = "settings.json";
pub const MAX_DELAY_MS: u64 = 3000;
pub const MAX_LEN: usize = 50;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub delay_ms: u64, // milliseconds
    pub array_len: usize,
    pub min_value: u32,
    pub max_value: u32,
    pub last_algorithm: Option<Algorithm>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
            array_len: DEFAULT_LEN,
            min_value: *DEFAULT_RANGE.start(),
            max_value: *DEFAULT_RANGE.end(),
            last_algorithm: None,
        }
    }
}

impl Settings {
    /// Reads settings from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Settings::default());
        }
        let contents = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), "Saved settings");
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.delay_ms > MAX_DELAY_MS {
            return Err(VisualizerError::invalid_setting(
                "delay_ms",
                format!("must be at most {}", MAX_DELAY_MS),
            ));
        }
        if self.array_len == 0 || self.array_len > MAX_LEN {
            return Err(VisualizerError::invalid_setting(
                "array_len",
                format!("must be between 1 and {}", MAX_LEN),
            ));
        }
        if self.min_value == 0 {
            return Err(VisualizerError::invalid_setting(
                "min_value",
                "must be a positive integer",
            ));
        }
        if self.min_value > self.max_value {
            return Err(VisualizerError::invalid_setting(
                "max_value",
                "must not be smaller than min_value",
            ));
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn value_range(&self) -> RangeInclusive<u32> {
        self.min_value..=self.max_value
    }
}

/// Writes settings back after a run and reports whether the file was touched.
///
/// `stored` is what [`Settings::load`] returned, or `None` when the file could
/// not be used. Unless `save_all` is set only the remembered algorithm changes,
/// and an unusable file is left as the user wrote it.
pub fn write_back(
    path: &Path,
    stored: Option<Settings>,
    effective: &Settings,
    save_all: bool,
    last_algorithm: Option<Algorithm>,
) -> Result<bool> {
    let mut to_save = match (save_all, stored) {
        (true, _) => effective.clone(),
        (false, Some(stored)) if last_algorithm.is_some() => stored,
        (false, None) => {
            warn!(path = %path.display(), "Settings file not updated, it could not be loaded");
            return Ok(false);
        }
        (false, Some(_)) => return Ok(false),
    };
    if last_algorithm.is_some() {
        to_save.last_algorithm = last_algorithm;
    }
    to_save.save(path)?;
    Ok(true)
}
