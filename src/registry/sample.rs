use chrono::{Days, NaiveDate};

use super::ClinicRegistry;
use crate::error::Result;
use crate::types::PersonDetails;

impl ClinicRegistry {
    /// A registry pre-populated with three doctors, two patients, one
    /// appointment and one bill, dated relative to `today`.
    pub fn with_sample_data(today: NaiveDate) -> Result<Self> {
        let mut registry = Self::new();

        let smith = registry
            .register_doctor(
                PersonDetails::new("Dr. Smith", 45, "Male", "555-1234"),
                "Cardiology",
                true,
            )
            .id;
        registry.register_doctor(
            PersonDetails::new("Dr. Adams", 38, "Female", "555-5678"),
            "Pediatrics",
            true,
        );
        registry.register_doctor(
            PersonDetails::new("Dr. Lee", 50, "Male", "555-9012"),
            "Orthopedics",
            false,
        );

        let john = registry
            .register_patient(
                PersonDetails::new("John Doe", 30, "Male", "555-1111"),
                "Flu",
                None,
            )
            .id;
        registry.register_patient(
            PersonDetails::new("Jane Roe", 25, "Female", "555-2222"),
            "Fracture",
            Some(today - Days::new(2)),
        );

        registry.schedule_appointment(john, smith, today + Days::new(1), "09:30 AM")?;
        registry.generate_bill(john, 150.0, today)?;

        tracing::debug!(stats = ?registry.stats(), "Loaded sample data");
        Ok(registry)
    }
}
