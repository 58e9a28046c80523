#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{build_query_handler, CliConfig, Command};
pub use toml_config::{LoggingConfig, LookupConfig};
