pub mod appointment;
pub mod bill;
pub mod doctor;
pub mod ids;
pub mod patient;
pub mod person;
pub mod summary;

pub use appointment::{Appointment, AppointmentStatus};
pub use bill::{Bill, PaymentOutcome};
pub use doctor::Doctor;
pub use ids::{AppointmentId, BillId, DoctorId, PatientId};
pub use patient::Patient;
pub use person::PersonDetails;
pub use summary::{AppointmentSummary, BillSummary, DEFAULT_CURRENCY_SYMBOL};
