use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity and contact fields shared by patients and doctors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
}

impl PersonDetails {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender: gender.into(),
            contact: contact.into(),
        }
    }
}

impl fmt::Display for PersonDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Gender: {}, Contact: {}",
            self.name, self.age, self.gender, self.contact
        )
    }
}

/// Renders a flag the way the record summaries show it
pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
