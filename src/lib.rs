//! # OctoFHIR Clinic
//!
//! In-memory record keeping for a small clinic: patients, doctors,
//! appointments and bills, with the cross-record rules that tie them
//! together.
//!
//! ## Features
//!
//! - **Registry**: registration, scheduling, billing and discharge with
//!   per-instance id counters
//! - **Shared access**: an async, lock-guarded handle for concurrent callers
//! - **Interactive menu**: a line-oriented front end over any reader/writer
//!
//! ## Quick Start
//!
//! ```rust
//! use octofhir_clinic::*;
//! use chrono::NaiveDate;
//!
//! # fn example() -> Result<()> {
//! let mut registry = ClinicRegistry::new();
//! let john = registry
//!     .register_patient(PersonDetails::new("John Doe", 30, "Male", "555-1111"), "Flu", None)
//!     .id;
//! let smith = registry
//!     .register_doctor(PersonDetails::new("Dr. Smith", 45, "Male", "555-1234"), "Cardiology", true)
//!     .id;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let appointment = registry.schedule_appointment(john, smith, date, "09:30 AM")?;
//! assert_eq!(appointment.status, AppointmentStatus::Scheduled);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod logging;
pub mod registry;
pub mod types;

pub use cli::{Menu, MenuChoice, Prompt};
pub use config::{ClinicConfig, LogConfig};
pub use error::{ClinicError, RecordKind, Result};
pub use registry::{ClinicRegistry, IdSequence, RegistryStats, SharedRegistry};
pub use types::*;
