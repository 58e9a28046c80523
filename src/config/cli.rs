use crate::builders::QueryHandlerBuilder;
use crate::config::toml_config::LookupConfig;
use crate::core::handler::BlacklistQueryHandler;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "person-lookup")]
#[command(about = "Look up people who may or may not exist")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit log lines as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Look up a name with the fixed handler
    Find { name: String },

    /// Look up a name against a blacklist
    Query {
        name: String,

        #[arg(long, value_delimiter = ',')]
        blacklist: Option<Vec<String>>,

        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Add two parcel counts
    Sum {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },
}

impl CliConfig {
    pub fn config_file(&self) -> Result<Option<LookupConfig>> {
        match &self.command {
            Command::Query {
                config: Some(path), ..
            } => LookupConfig::from_file(path).map(Some),
            _ => Ok(None),
        }
    }
}

/// Builds the blacklist handler: `--blacklist` wins over the config file,
/// which wins over the builder default.
///
/// Flag entries go through the same blank-name check as config file entries.
pub fn build_query_handler(
    blacklist: Option<&[String]>,
    file: Option<&LookupConfig>,
) -> Result<BlacklistQueryHandler> {
    let builder = QueryHandlerBuilder::new();
    let builder = match (blacklist, file) {
        (Some(names), _) => {
            for name in names {
                validate_non_empty_string("blacklist", name)?;
            }
            builder.with_blacklist(names.iter().cloned().collect())
        }
        (None, Some(file)) => builder.with_blacklist(file.blacklist()),
        (None, None) => builder,
    };
    Ok(builder.build())
}
