//! Builders for test fixtures and for the handler under test.
//!
//! Every builder starts from dummy defaults so a test only names the values
//! it actually cares about.

use crate::core::adder::ParcelAdder;
use crate::core::handler::{BlacklistQueryHandler, HOME_PLACE};
use crate::core::{Blacklist, Person};

pub const DEFAULT_BANNED_NAME: &str = "Bogeyman";

#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: String,
    place: String,
    age: i32,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            place: HOME_PLACE.to_string(),
            age: 0,
        }
    }
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = place.into();
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn build(self) -> Person {
        Person::new(self.name, self.place, self.age)
    }
}

#[derive(Debug, Clone)]
pub struct QueryHandlerBuilder {
    blacklist: Blacklist,
}

impl Default for QueryHandlerBuilder {
    fn default() -> Self {
        Self {
            blacklist: [DEFAULT_BANNED_NAME].into_iter().collect(),
        }
    }
}

impl QueryHandlerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole blacklist, default entry included.
    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    pub fn with_banned_name(mut self, name: impl Into<String>) -> Self {
        self.blacklist.push(name);
        self
    }

    pub fn build(self) -> BlacklistQueryHandler {
        BlacklistQueryHandler::new(self.blacklist)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParcelAdderBuilder;

impl ParcelAdderBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(self) -> ParcelAdder {
        ParcelAdder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_builder_defaults() {
        let person = PersonBuilder::new().build();
        assert_eq!(person, Person::new("Name", "North Pole", 0));
    }

    #[test]
    fn test_person_builder_overrides() {
        let person = PersonBuilder::new()
            .with_name("Saint Nicholas")
            .with_place("Spain")
            .with_age(1700)
            .build();
        assert_eq!(person, Person::new("Saint Nicholas", "Spain", 1700));
    }

    #[test]
    fn test_handler_builder_default_blacklist() {
        let handler = QueryHandlerBuilder::new().build();
        let names: Vec<&String> = handler.blacklist().iter().collect();
        assert_eq!(names, vec!["Bogeyman"]);
    }

    #[test]
    fn test_with_banned_name_appends() {
        let handler = QueryHandlerBuilder::new().with_banned_name("Krampus").build();
        assert_eq!(handler.blacklist().len(), 2);
        assert!(handler.blacklist().contains("bogeyman"));
        assert!(handler.blacklist().contains("krampus"));
    }
}
