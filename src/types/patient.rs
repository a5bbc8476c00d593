use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PatientId, PersonDetails, person::yes_no};

/// A registered patient.
///
/// Admission is carried as an optional date: a patient is admitted exactly
/// when `admission_date` is present, so the flag and the date cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    #[serde(flatten)]
    pub person: PersonDetails,
    pub disease: String,
    pub admission_date: Option<NaiveDate>,
}

impl Patient {
    pub fn new(
        id: PatientId,
        person: PersonDetails,
        disease: impl Into<String>,
        admission_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            person,
            disease: disease.into(),
            admission_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn is_admitted(&self) -> bool {
        self.admission_date.is_some()
    }

    /// Clears the admission, returning the date the patient was admitted on
    pub(crate) fn discharge(&mut self) -> Option<NaiveDate> {
        self.admission_date.take()
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, {}, Disease: {}, Admitted: {}",
            self.id,
            self.person,
            self.disease,
            yes_no(self.is_admitted())
        )?;
        if let Some(date) = self.admission_date {
            write!(f, ", Admission Date: {date}")?;
        }
        Ok(())
    }
}
