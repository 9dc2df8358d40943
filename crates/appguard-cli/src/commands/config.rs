//! `appguard config`: inspect the effective configuration.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.print(&render_toml(&config)?)?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::effective_path(config_file);
            output.print(&path.display().to_string())?;
            if !path.exists() {
                tracing::info!(path = %path.display(), "Config file does not exist; using defaults");
            }
        }
    }

    Ok(())
}

fn render_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
