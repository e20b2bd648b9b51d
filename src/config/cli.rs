use crate::config::service::{LogFormat, ServiceConfig};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "number-classifier")]
#[command(about = "HTTP service that classifies numbers and attaches a fun fact")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Override server.port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override fun_facts.base_url
    #[arg(long)]
    pub facts_url: Option<String>,

    /// Override fun_facts.timeout_seconds
    #[arg(long)]
    pub fact_timeout: Option<u64>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file (or defaults) and applies command-line overrides.
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.facts_url {
            config.fun_facts.base_url = url.clone();
        }
        if let Some(timeout) = self.fact_timeout {
            config.fun_facts.timeout_seconds = timeout;
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }

        Ok(config)
    }
}
