use crate::domain::model::Person;
use crate::utils::error::Result;

pub trait PersonQuery: Send + Sync {
    fn execute_query(&self, name: &str) -> Result<Person>;
}
