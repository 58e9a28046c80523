use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
    place: String,
    age: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Name,
    Place,
    Age,
}

impl PersonField {
    pub const ALL: [PersonField; 3] = [PersonField::Name, PersonField::Place, PersonField::Age];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonField::Name => "name",
            PersonField::Place => "place",
            PersonField::Age => "age",
        }
    }
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field that differs between an actual and an expected [`Person`].
///
/// Values are kept in their display form; strings are quoted so that
/// `"Santa"` and `"Santa "` are told apart in failure output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDifference {
    pub field: PersonField,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for FieldDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, found {}",
            self.field, self.expected, self.actual
        )
    }
}

impl Person {
    pub fn new(name: impl Into<String>, place: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            place: place.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    fn rendered(&self, field: PersonField) -> String {
        match field {
            PersonField::Name => format!("{:?}", self.name),
            PersonField::Place => format!("{:?}", self.place),
            PersonField::Age => self.age.to_string(),
        }
    }

    /// Compares `self` against `expected` on `fields` only, in the order given.
    pub fn differences(&self, expected: &Person, fields: &[PersonField]) -> Vec<FieldDifference> {
        fields
            .iter()
            .filter_map(|&field| {
                let actual = self.rendered(field);
                let wanted = expected.rendered(field);
                (actual != wanted).then_some(FieldDifference {
                    field,
                    expected: wanted,
                    actual,
                })
            })
            .collect()
    }

    pub fn differences_all(&self, expected: &Person) -> Vec<FieldDifference> {
        self.differences(expected, &PersonField::ALL)
    }

    pub fn equivalent_on(&self, expected: &Person, fields: &[PersonField]) -> bool {
        self.differences(expected, fields).is_empty()
    }
}
