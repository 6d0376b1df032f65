//! Tunables for the escape behaviour and the playground around it.
//!
//! Values are loaded once at startup and handed to the orchestration
//! layer explicitly; nothing here is global.

use crate::geometry::Point;
use crate::storage::{self, config_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Overrides the settings file location when set.
pub const CONFIG_ENV: &str = "RYEBUTTON_CONFIG";

/// Distances that drive the escape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscapeConfig {
    /// Pointer closer than this (inclusive) makes the button run
    pub threshold_distance: f64,
    /// Radius of the circle the button jumps along
    pub escape_distance: f64,
    /// Keep-out band along every edge of the surface
    pub margin: f64,
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self {
            threshold_distance: 200.0,
            escape_distance: 200.0,
            margin: 50.0,
        }
    }
}

impl EscapeConfig {
    pub fn validate(&self) -> storage::Result<()> {
        let fields = [
            ("threshold_distance", self.threshold_distance),
            ("escape_distance", self.escape_distance),
            ("margin", self.margin),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(StorageError::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.escape_distance == 0.0 {
            return Err(StorageError::InvalidConfig(
                "escape_distance must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Everything the app reads from its settings file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundSettings {
    pub escape: EscapeConfig,
    /// Periodic re-evaluation interval in milliseconds (0 = input only)
    pub tick_interval_ms: u64,
    /// Where the button starts, surface-local
    pub start: Point,
    pub label: String,
    /// Append why each frame ran to the status line
    pub show_frame_reason: bool,
}

impl Default for PlaygroundSettings {
    fn default() -> Self {
        Self {
            escape: EscapeConfig::default(),
            tick_interval_ms: 100,
            start: Point::new(400.0, 400.0),
            label: "CLICK ME IN THE RYE".to_string(),
            show_frame_reason: false,
        }
    }
}

impl PlaygroundSettings {
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| config_dir("ryebutton").join("settings.json"))
    }

    pub fn load(path: &std::path::Path) -> storage::Result<Self> {
        let settings: Self = storage::read_json(path)?;
        settings.escape.validate()?;
        if !settings.start.x.is_finite() || !settings.start.y.is_finite() {
            return Err(StorageError::InvalidConfig("start must be finite".into()));
        }
        Ok(settings)
    }

    pub fn save(&self, path: &std::path::Path) -> storage::Result<()> {
        storage::write_json(path, self)
    }

    /// Load from [`Self::config_path`], falling back to defaults.
    ///
    /// A missing file is normal on first run. Anything else is reported
    /// on stderr and ignored.
    pub fn load_or_default() -> Self {
        let path = Self::config_path();
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(StorageError::NotFound(_)) => Self::default(),
            Err(e) => {
                eprintln!("[ryebutton] ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
