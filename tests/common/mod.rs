use chrono::NaiveDate;
use octofhir_clinic::*;

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[allow(dead_code)]
pub fn john_doe() -> PersonDetails {
    PersonDetails::new("John Doe", 30, "Male", "555-1111")
}

#[allow(dead_code)]
pub fn jane_roe() -> PersonDetails {
    PersonDetails::new("Jane Roe", 25, "Female", "555-2222")
}

#[allow(dead_code)]
pub fn dr_smith() -> PersonDetails {
    PersonDetails::new("Dr. Smith", 45, "Male", "555-1234")
}

#[allow(dead_code)]
pub fn dr_lee() -> PersonDetails {
    PersonDetails::new("Dr. Lee", 50, "Male", "555-9012")
}

/// One outpatient (John), one available doctor (Smith), one unavailable doctor (Lee)
#[allow(dead_code)]
pub fn create_test_registry() -> ClinicRegistry {
    let mut registry = ClinicRegistry::new();
    registry.register_patient(john_doe(), "Flu", None);
    registry.register_doctor(dr_smith(), "Cardiology", true);
    registry.register_doctor(dr_lee(), "Orthopedics", false);
    registry
}
