use anyhow::{Context, Result};
use marathon_plan::DeliveryConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub plan: PlanDefaults,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub delivery: DeliveryConfig,
}

/// Values used for any plan option not given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDefaults {
    #[serde(default = "default_training_weeks")]
    pub training_weeks: u32,

    #[serde(default = "default_current_weekly_miles")]
    pub current_weekly_miles: u32,

    #[serde(default = "default_peak_weekly_miles")]
    pub peak_weekly_miles: u32,

    #[serde(default = "default_days_per_week")]
    pub days_per_week: u32,

    #[serde(default = "default_goal_time")]
    pub goal_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_true")]
    pub show_summary: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Default value functions
fn default_training_weeks() -> u32 {
    16
}

fn default_current_weekly_miles() -> u32 {
    25
}

fn default_peak_weekly_miles() -> u32 {
    45
}

fn default_days_per_week() -> u32 {
    5
}

fn default_goal_time() -> String {
    "4:00:00".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            training_weeks: default_training_weeks(),
            current_weekly_miles: default_current_weekly_miles(),
            peak_weekly_miles: default_peak_weekly_miles(),
            days_per_week: default_days_per_week(),
            goal_time: default_goal_time(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_summary: default_true(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.marathon-plan/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".marathon-plan"))
    }

    /// Config file path: the override if given, else ~/.marathon-plan/config.toml
    pub fn config_file(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(Self::config_dir()?.join("config.toml")),
        }
    }

    /// Load configuration from file
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_file = Self::config_file(path)?;

        if !config_file.exists() {
            tracing::debug!("Config file {} not found, using defaults", config_file.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read config file {}", config_file.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_file = Self::config_file(path)?;
        if let Some(dir) = config_file.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(config_file)
    }
}
