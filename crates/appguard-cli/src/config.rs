//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `APPGUARD__SECTION__KEY`
//! 3. Config file (`--config FILE`, or `config.toml` in the platform
//!    config directory when present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use appguard_core::application::{DEFAULT_VALIDATED_OPERATIONS, Operation};

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "APPGUARD";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Admission settings.
    pub admission: AdmissionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionConfig {
    /// Operations whose payload is validated; anything else is admitted.
    pub validated_operations: Vec<String>,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            validated_operations: DEFAULT_VALIDATED_OPERATIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl AdmissionConfig {
    /// Parse the configured operation names.
    pub fn operations(&self) -> CliResult<Vec<Operation>> {
        self.validated_operations
            .iter()
            .map(|name| {
                name.parse::<Operation>().map_err(|e| CliError::ConfigError {
                    message: format!("admission.validated_operations: {e}"),
                    source: Some(Box::new(e)),
                })
            })
            .collect()
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the
    /// environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path().as_path()).required(false),
        };

        let loaded: Self = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("admission.validated_operations"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        // Reject unknown operation names at startup rather than per request.
        loaded.admission.operations()?;

        debug!(?loaded, "Configuration loaded");
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.appguard.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "appguard", "appguard")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".appguard.toml"))
    }

    /// The file that was (or would be) read.
    pub fn effective_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }
}
