pub mod config;

use clap::{Parser, Subcommand};

/// Shiplog — a daily-report service with mocked AI evaluation.
#[derive(Debug, Parser)]
#[command(name = "shiplog", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default when no subcommand is given).
    Serve,
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

/// Load `config.toml` (or the file named by `SHIPLOG_CONFIG`), falling
/// back to defaults when no file exists.
pub fn load_config() -> anyhow::Result<(shiplog_domain::config::Config, String)> {
    let config_path =
        std::env::var("SHIPLOG_CONFIG").unwrap_or_else(|_| "config.toml".into());

    let config = if std::path::Path::new(&config_path).exists() {
        let raw = std::fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("reading {config_path}: {e}"))?;
        toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("parsing {config_path}: {e}"))?
    } else {
        shiplog_domain::config::Config::default()
    };

    Ok((config, config_path))
}
