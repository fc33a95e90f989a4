pub mod toml_config;

use crate::core::ServerSettings;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use clap::Parser;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "lp-solver")]
#[command(about = "HTTP service that solves linear programs")]
pub struct CliConfig {
    /// Address to bind [default: 0.0.0.0]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind [default: 8000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging CLI flags over the optional TOML file.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: None,
            log_format: LogFormat::Compact,
            verbose: false,
        }
    }
}

impl AppConfig {
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        Ok(Self::merge(cli, &file))
    }

    pub fn merge(cli: &CliConfig, file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            host: cli
                .host
                .clone()
                .or_else(|| file.host().map(str::to_string))
                .unwrap_or(defaults.host),
            port: cli.port.or(file.port()).unwrap_or(defaults.port),
            log_level: file.log_level().map(str::to_string),
            log_format: cli
                .log_format
                .or(file.log_format())
                .unwrap_or(defaults.log_format),
            verbose: cli.verbose,
        }
    }
}

impl ServerSettings for AppConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_all_interfaces() {
        let config = AppConfig::merge(&CliConfig::default(), &TomlConfig::default());

        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            "[server]\nhost = \"127.0.0.1\"\nport = 9000\n\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();
        let cli = CliConfig::parse_from(["lp-solver", "--port", "9100"]);

        let config = AppConfig::merge(&cli, &file);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9100);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_cli_parses_log_format() {
        let cli = CliConfig::parse_from(["lp-solver", "--log-format", "json", "-v"]);
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig {
            config: Some(PathBuf::from("/nonexistent/lp-solver.toml")),
            ..CliConfig::default()
        };
        assert!(AppConfig::load(&cli).is_err());
    }
}
