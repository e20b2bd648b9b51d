pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::ServiceConfig;

pub use crate::adapters::NumbersApiClient;
pub use crate::app::server::{build_router, serve};
pub use crate::core::classifier::{parse_number, NumberClassifier};
pub use crate::utils::error::{ClassifierError, Result};
