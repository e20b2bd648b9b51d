#[cfg(feature = "cli")]
pub mod cli;
pub mod service;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use service::{FunFactConfig, LogFormat, LoggingConfig, ServerConfig, ServiceConfig};
