use std::path::{Path, PathBuf};

use agenda_core::GridConfig;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

static DEFAULT_DATA_DIR: &str = "~/agenda";
static ENV_PREFIX: &str = "AGENDA";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_resources_file() -> PathBuf {
    PathBuf::from("resources.json")
}

fn default_appointments_file() -> PathBuf {
    PathBuf::from("appointments.json")
}

/// Configuration at ~/.config/agenda/config.toml, overridable with
/// `AGENDA_*` environment variables (nested keys use `__`, e.g.
/// `AGENDA_GRID__WEEK_START=Mon`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaConfig {
    /// Directory holding the resource and appointment exports
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Relative to `data_dir` unless absolute
    #[serde(default = "default_resources_file")]
    pub resources_file: PathBuf,

    #[serde(default = "default_appointments_file")]
    pub appointments_file: PathBuf,

    #[serde(default)]
    pub grid: GridConfig,
}

impl AgendaConfig {
    /// Get the config file path (~/.config/agenda/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented default file on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: &Path, env: Environment) -> Result<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize())
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn resources_path(&self) -> PathBuf {
        self.data_path().join(&self.resources_file)
    }

    pub fn appointments_path(&self) -> PathBuf {
        self.data_path().join(&self.appointments_file)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# agenda configuration

# Where resources.json and appointments.json live:
# data_dir = \"{}\"
# resources_file = \"resources.json\"
# appointments_file = \"appointments.json\"

# [grid]
# First day of the week view:
# week_start = \"Sun\"

# [grid.hours]
# Visible hour rows (inclusive):
# start_hour = 7
# end_hour = 20
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create config directory at {}", parent.display()))?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Could not write config file at {}", path.display()))?;

        Ok(())
    }
}

/// `AGENDA_DATA_DIR`, `AGENDA_GRID__WEEK_START`, ...
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}
