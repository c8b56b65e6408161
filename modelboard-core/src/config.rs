//! Configuration for scoring and figure layout.
//!
//! Uses `figment` for layered configuration: defaults -> user config file ->
//! workspace config file -> environment -> explicit overrides.

use crate::dataset::DatasetTag;
use crate::error::{BoardError, Result};
use crate::metrics::Normalize;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level modelboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Metric computation settings.
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Figure layout settings.
    #[serde(default)]
    pub plots: PlotConfig,
}

/// Metric computation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Value reported when precision, recall or F1 divide by zero (0.0-1.0).
    #[serde(default)]
    pub zero_division: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { zero_division: 0.0 }
    }
}

/// Figure layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Dataset used when a caller does not name one.
    #[serde(default = "default_dataset")]
    pub default_dataset: DatasetTag,
    /// Rows in the confusion matrix grid.
    #[serde(default = "default_grid_rows")]
    pub grid_rows: usize,
    /// Panels per row in the metric bar chart.
    #[serde(default = "default_bar_columns")]
    pub bar_columns: usize,
    /// Edge length of one grid panel, in inches.
    #[serde(default = "default_panel_size")]
    pub panel_size: f64,
    /// Confusion matrix normalization.
    #[serde(default)]
    pub normalize: Normalize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            default_dataset: default_dataset(),
            grid_rows: default_grid_rows(),
            bar_columns: default_bar_columns(),
            panel_size: default_panel_size(),
            normalize: Normalize::default(),
        }
    }
}

fn default_dataset() -> DatasetTag {
    DatasetTag::Train
}

fn default_grid_rows() -> usize {
    2
}

fn default_bar_columns() -> usize {
    2
}

fn default_panel_size() -> f64 {
    3.0
}

/// Zero-division fallbacks are reported as metric values, so they must lie in [0, 1].
pub fn check_zero_division(value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(BoardError::config(format!(
            "metrics.zero_division must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}

impl BoardConfig {
    /// Reject values that would produce out-of-range scores or empty figures.
    pub fn validate(&self) -> Result<()> {
        check_zero_division(self.metrics.zero_division)?;
        if self.plots.grid_rows == 0 {
            return Err(BoardError::config("plots.grid_rows must be at least 1"));
        }
        if self.plots.bar_columns == 0 {
            return Err(BoardError::config("plots.bar_columns must be at least 1"));
        }
        if self.plots.panel_size.is_nan() || self.plots.panel_size <= 0.0 {
            return Err(BoardError::config("plots.panel_size must be positive"));
        }
        Ok(())
    }
}

/// Load configuration from layered sources.
///
/// Priority (highest to lowest):
/// 1. Explicit overrides (passed as argument)
/// 2. Environment variables (prefixed with `MODELBOARD_`)
/// 3. Workspace-local config (`.modelboard/config.toml`)
/// 4. User config (`~/.config/modelboard/config.toml`)
/// 5. Built-in defaults
pub fn load_config(
    workspace: Option<&Path>,
    overrides: Option<&BoardConfig>,
) -> std::result::Result<BoardConfig, Box<figment::Error>> {
    let mut figment = Figment::from(Serialized::defaults(BoardConfig::default()));

    if let Some(dirs) = directories::ProjectDirs::from("dev", "modelboard", "modelboard") {
        let user_config = dirs.config_dir().join("config.toml");
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }
    }

    if let Some(ws) = workspace {
        let ws_config = ws.join(".modelboard").join("config.toml");
        if ws_config.exists() {
            figment = figment.merge(Toml::file(&ws_config));
        }
    }

    // MODELBOARD_PLOTS__GRID_ROWS, MODELBOARD_METRICS__ZERO_DIVISION, ...
    figment = figment.merge(Env::prefixed("MODELBOARD_").split("__"));

    if let Some(overrides) = overrides {
        figment = figment.merge(Serialized::defaults(overrides));
    }

    figment.extract().map_err(Box::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.metrics.zero_division, 0.0);
        assert_eq!(config.plots.grid_rows, 2);
        assert_eq!(config.plots.bar_columns, 2);
        assert_eq!(config.plots.default_dataset, DatasetTag::Train);
        assert_eq!(config.plots.normalize, Normalize::True);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = BoardConfig::default();
        config.metrics.zero_division = 1.5;
        assert!(matches!(config.validate(), Err(BoardError::Config(_))));

        let mut config = BoardConfig::default();
        config.metrics.zero_division = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = BoardConfig::default();
        config.plots.grid_rows = 0;
        assert!(config.validate().is_err());

        let mut config = BoardConfig::default();
        config.plots.panel_size = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = BoardConfig::default();
        config.plots.normalize = Normalize::All;
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: BoardConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: BoardConfig = toml::from_str("[plots]\ngrid_rows = 3\n").unwrap();
        assert_eq!(config.plots.grid_rows, 3);
        assert_eq!(config.plots.bar_columns, 2);
        assert_eq!(config.metrics.zero_division, 0.0);
    }

    #[test]
    fn test_load_config_with_overrides() {
        let mut overrides = BoardConfig::default();
        overrides.plots.panel_size = 4.5;
        overrides.metrics.zero_division = 1.0;

        let config = load_config(None, Some(&overrides)).unwrap();
        assert_eq!(config.plots.panel_size, 4.5);
        assert_eq!(config.metrics.zero_division, 1.0);
    }

    #[test]
    fn test_load_config_from_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let board_dir = dir.path().join(".modelboard");
        std::fs::create_dir_all(&board_dir).unwrap();
        std::fs::write(
            board_dir.join("config.toml"),
            r#"
[metrics]
zero_division = 1.0

[plots]
default_dataset = "validate"
normalize = "pred"
"#,
        )
        .unwrap();

        let config = load_config(Some(dir.path()), None).unwrap();
        assert_eq!(config.metrics.zero_division, 1.0);
        assert_eq!(config.plots.default_dataset, DatasetTag::Validate);
        assert_eq!(config.plots.normalize, Normalize::Pred);
        assert_eq!(config.plots.grid_rows, 2);
    }
}
