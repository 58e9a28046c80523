pub mod builders;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::LookupConfig;

pub use builders::{ParcelAdderBuilder, PersonBuilder, QueryHandlerBuilder};
pub use core::{
    adder::ParcelAdder,
    handler::{BlacklistQueryHandler, FixedQueryHandler},
    Blacklist, FieldDifference, Person, PersonField, PersonQuery,
};
pub use utils::error::{LookupError, Result};
