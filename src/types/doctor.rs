use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DoctorId, PersonDetails, person::yes_no};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    #[serde(flatten)]
    pub person: PersonDetails,
    pub specialization: String,
    /// Operator-controlled; read by the scheduler only
    pub available: bool,
}

impl Doctor {
    pub fn new(
        id: DoctorId,
        person: PersonDetails,
        specialization: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            id,
            person,
            specialization: specialization.into(),
            available,
        }
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, {}, Specialization: {}, Available: {}",
            self.id,
            self.person,
            self.specialization,
            yes_no(self.available)
        )
    }
}
