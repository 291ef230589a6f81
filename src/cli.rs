//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    load_config, validate_config, ConfigError, GatewayConfig, LogFormat,
};

/// Startup flags. Anything given here overrides the config file.
#[derive(Parser, Debug, Clone)]
#[command(name = "guest-gateway", version, about = "Credential-injecting gateway on a Unix domain socket", long_about = None)]
pub struct Cli {
    /// Unix domain socket to listen on [default: /run/guest/volumes-service.sock]
    #[arg(short = 's', long = "socket")]
    pub socket: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level for the gateway and its access log
    #[arg(long = "log-level")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long = "json-logs")]
    pub json_logs: bool,
}

impl Cli {
    /// Resolve the effective configuration: defaults, then the config file,
    /// then flags.
    pub fn into_config(self) -> Result<GatewayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GatewayConfig::default(),
        };

        if let Some(socket) = self.socket {
            config.listener.socket_path = socket;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
        if self.json_logs {
            config.observability.format = LogFormat::Json;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
