// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration and scenario file handling

use anyhow::{Context, Result};
use ecoethics_engine::Scenario;
use ecoethics_report::ExportMetadata;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input values used when neither a scenario file nor a flag sets them
    #[serde(default)]
    pub scenario: Scenario,

    /// Metadata written into JSON exports
    #[serde(default)]
    pub export: ExportMetadata,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Pretty,
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|e| e == "toml").unwrap_or(false)
}

/// Parse a TOML file, or YAML (which also accepts JSON) for any other extension
fn read_structured<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let value = if is_toml(path) {
        toml::from_str(&content).with_context(|| format!("Invalid TOML in {}", path.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?
    };
    Ok(value)
}

/// Load configuration from a path; a missing file yields the defaults
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    read_structured(path)
}

/// Load a scenario file; keys it omits take `base` values
pub fn load_scenario(path: &Path, base: &Scenario) -> Result<Scenario> {
    let overrides: ScenarioOverrides = read_structured(path)?;
    let mut scenario = base.clone();
    overrides.apply(&mut scenario);
    debug!(?scenario, path = %path.display(), "Loaded scenario");
    Ok(scenario)
}

/// Partial scenario: every key optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioOverrides {
    pub params_billions: Option<f64>,
    pub model_type: Option<String>,
    pub training_hours: Option<u64>,
    pub tokens_per_day: Option<u64>,
    pub inference_days: Option<u32>,
    pub location: Option<String>,
    pub hardware: Option<String>,
    pub pue: Option<f64>,
}

impl ScenarioOverrides {
    pub fn apply(&self, scenario: &mut Scenario) {
        if let Some(v) = self.params_billions {
            scenario.params_billions = v;
        }
        if let Some(ref v) = self.model_type {
            scenario.model_type = v.clone();
        }
        if let Some(v) = self.training_hours {
            scenario.training_hours = v;
        }
        if let Some(v) = self.tokens_per_day {
            scenario.tokens_per_day = v;
        }
        if let Some(v) = self.inference_days {
            scenario.inference_days = v;
        }
        if let Some(ref v) = self.location {
            scenario.location = v.clone();
        }
        if let Some(ref v) = self.hardware {
            scenario.hardware = v.clone();
        }
        if let Some(v) = self.pue {
            scenario.pue = v;
        }
    }
}

/// Get the default config path
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".ecoethics/config.toml")
}

/// Write default configuration to a file
pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if is_toml(path) {
        toml::to_string_pretty(&config)?
    } else {
        serde_yaml::to_string(&config)?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scenario, Scenario::default());
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Full);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_toml_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[scenario]\nlocation = \"eu-north\"\npue = 1.2\n\n[log]\nlevel = \"warn\"\nformat = \"compact\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.scenario.location, "eu-north");
        assert_eq!(config.scenario.pue, 1.2);
        assert_eq!(config.scenario.params_billions, 7.0);
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.format, LogFormat::Compact);
        assert_eq!(config.export, ExportMetadata::default());
    }

    #[test]
    fn test_yaml_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "export:\n  author: Jane Doe\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.export.author, "Jane Doe");
        assert_eq!(config.export.version, ExportMetadata::default().version);
    }

    #[test]
    fn test_write_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        for name in ["nested/config.toml", "config.yaml"] {
            let path = temp.path().join(name);
            write_default_config(&path).unwrap();
            assert_eq!(load_config(&path).unwrap(), Config::default());
        }
    }

    #[test]
    fn test_scenario_file_overrides_base() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gpt3.toml");
        std::fs::write(&path, "params_billions = 175.0\nhardware = \"V100\"\n").unwrap();

        let base = Scenario {
            location: "global".to_string(),
            ..Scenario::default()
        };
        let scenario = load_scenario(&path, &base).unwrap();
        assert_eq!(scenario.params_billions, 175.0);
        assert_eq!(scenario.hardware, "V100");
        assert_eq!(scenario.location, "global");
        assert_eq!(scenario.training_hours, 1000);
    }

    #[test]
    fn test_scenario_rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("typo.toml");
        std::fs::write(&path, "parameters = 70.0\n").unwrap();
        assert!(load_scenario(&path, &Scenario::default()).is_err());
    }
}
