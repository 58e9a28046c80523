pub mod adder;
pub mod handler;

pub use crate::domain::blacklist::Blacklist;
pub use crate::domain::model::{FieldDifference, Person, PersonField};
pub use crate::domain::ports::PersonQuery;
pub use crate::utils::error::Result;
