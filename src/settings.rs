//! Settings for the layout and puzzle engines.
//!
//! The settings file (`learnkit.yml`) configures the geometry the engines
//! use: where the mind map is centred, how far apart its levels are, and how
//! large rendered puzzle cells are.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::mindmap::{LayoutParams, Point};
use crate::puzzle::GridMetrics;

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = "learnkit.yml";

/// Mind-map layout geometry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSettings {
    pub center_x: f64,
    pub center_y: f64,
    /// Distance from the subject to each category.
    pub level_spacing: f64,
    /// Concept distance from its category, relative to `level_spacing`.
    pub concept_ratio: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        let params = LayoutParams::default();
        Self {
            center_x: params.center.x,
            center_y: params.center.y,
            level_spacing: params.level_spacing,
            concept_ratio: params.concept_ratio,
        }
    }
}

impl LayoutSettings {
    pub fn params(&self) -> LayoutParams {
        LayoutParams {
            center: Point::new(self.center_x, self.center_y),
            level_spacing: self.level_spacing,
            concept_ratio: self.concept_ratio,
        }
    }
}

/// Rendered puzzle grid geometry, used to position found-word notifications.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSettings {
    pub cell_size: f64,
    pub gap: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        let metrics = GridMetrics::default();
        Self {
            cell_size: metrics.cell_size,
            gap: metrics.gap,
            origin_x: metrics.origin.x,
            origin_y: metrics.origin.y,
        }
    }
}

impl GridSettings {
    pub fn metrics(&self) -> GridMetrics {
        GridMetrics {
            cell_size: self.cell_size,
            gap: self.gap,
            origin: Point::new(self.origin_x, self.origin_y),
        }
    }
}

/// Settings loaded from `learnkit.yml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub layout: LayoutSettings,

    #[serde(default)]
    pub grid: GridSettings,
}

/// Errors that can occur when loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("setting '{key}' must be a finite number")]
    NotFinite { key: &'static str },

    #[error("setting '{key}' must be greater than zero, got {value}")]
    NotPositive { key: &'static str, value: f64 },

    #[error("setting '{key}' must not be negative, got {value}")]
    Negative { key: &'static str, value: f64 },
}

impl Settings {
    /// Load settings from a file path.
    ///
    /// Returns the default settings if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let settings: Settings = serde_yaml::from_str(&content)?;
                settings.validate()?;
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(SettingsError::Io(e)),
        }
    }

    /// Check every geometry value is usable.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let values = [
            ("layout.center_x", self.layout.center_x),
            ("layout.center_y", self.layout.center_y),
            ("layout.level_spacing", self.layout.level_spacing),
            ("layout.concept_ratio", self.layout.concept_ratio),
            ("grid.cell_size", self.grid.cell_size),
            ("grid.gap", self.grid.gap),
            ("grid.origin_x", self.grid.origin_x),
            ("grid.origin_y", self.grid.origin_y),
        ];
        for (key, value) in values {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite { key });
            }
        }

        for (key, value) in [
            ("layout.level_spacing", self.layout.level_spacing),
            ("layout.concept_ratio", self.layout.concept_ratio),
            ("grid.cell_size", self.grid.cell_size),
        ] {
            if value <= 0.0 {
                return Err(SettingsError::NotPositive { key, value });
            }
        }

        if self.grid.gap < 0.0 {
            return Err(SettingsError::Negative {
                key: "grid.gap",
                value: self.grid.gap,
            });
        }

        Ok(())
    }
}

/// Resolve the settings path: an explicit path with `~` expanded, or
/// `learnkit.yml` in the working directory.
pub fn resolve_path(explicit: Option<&str>) -> PathBuf {
    match explicit {
        Some(path) => PathBuf::from(shellexpand::tilde(path).to_string()),
        None => PathBuf::from(SETTINGS_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.yml");

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.layout.params(), LayoutParams::default());
        assert_eq!(settings.grid.metrics(), GridMetrics::default());
    }

    #[test]
    fn test_load_valid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("learnkit.yml");

        std::fs::write(
            &path,
            "layout:\n  center_x: 0\n  center_y: 0\n  level_spacing: 120\ngrid:\n  cell_size: 32\n",
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        let params = settings.layout.params();
        assert_eq!(params.center, Point::new(0.0, 0.0));
        assert_eq!(params.level_spacing, 120.0);
        assert_eq!(params.concept_ratio, 0.8);
        assert_eq!(settings.grid.cell_size, 32.0);
        assert_eq!(settings.grid.gap, 4.0);
    }

    #[test]
    fn test_load_empty_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("learnkit.yml");

        std::fs::write(&path, "").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.layout.level_spacing, 250.0);
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("learnkit.yml");

        std::fs::write(&path, "layout:\n  radius: 10\n").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_zero_spacing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("learnkit.yml");

        std::fs::write(&path, "layout:\n  level_spacing: 0\n").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::NotPositive { key: "layout.level_spacing", .. }
        ));
    }

    #[test]
    fn test_validate_rejects_negative_gap() {
        let mut settings = Settings::default();
        settings.grid.gap = -1.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Negative { key: "grid.gap", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut settings = Settings::default();
        settings.layout.center_x = f64::NAN;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NotFinite { key: "layout.center_x" })
        ));
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(resolve_path(None), PathBuf::from(SETTINGS_FILE));
        assert_eq!(
            resolve_path(Some("configs/custom.yml")),
            PathBuf::from("configs/custom.yml")
        );
        assert!(resolve_path(Some("~/learnkit.yml")).ends_with("learnkit.yml"));
    }
}
