use crate::case::Style;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub style: Style,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub skip_empty: bool,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::default(),
            format: OutputFormat::default(),
            skip_empty: false,
            color: default_color(),
        }
    }
}

/// One config file. Only the keys present in the file are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialConfig {
    pub style: Option<Style>,
    pub format: Option<OutputFormat>,
    pub skip_empty: Option<bool>,
    pub color: Option<bool>,
}

/// Settings given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub style: Option<Style>,
    pub format: Option<OutputFormat>,
    pub skip_empty: bool,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        Self::load_from(Self::global_config_path().as_deref(), &local_path, overrides)
    }

    pub fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        // Local config overrides global
        if local.exists() {
            debug!(path = %local.display(), "loading local config");
            config = config.merge(Self::from_file(local)?);
        }

        if let Some(style) = overrides.style {
            config.style = style;
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }
        if overrides.skip_empty {
            config.skip_empty = true;
        }
        if overrides.no_color {
            config.color = false;
        }

        debug!(?config, "effective configuration");
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<PartialConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: PartialConfig) -> Self {
        // Keys set in `other` win, including ones set back to their default
        if let Some(style) = other.style {
            self.style = style;
        }
        if let Some(format) = other.format {
            self.format = format;
        }
        if let Some(skip_empty) = other.skip_empty {
            self.skip_empty = skip_empty;
        }
        if let Some(color) = other.color {
            self.color = color;
        }
        self
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
