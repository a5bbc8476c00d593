//! Error types for clinic registry operations

use std::fmt;
use thiserror::Error;

/// Result type for clinic operations
pub type Result<T> = std::result::Result<T, ClinicError>;

/// The record collections owned by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Patient,
    Doctor,
    Appointment,
    Bill,
}

impl RecordKind {
    /// Plural label used in "none registered" messages
    pub fn plural(&self) -> &'static str {
        match self {
            RecordKind::Patient => "patients",
            RecordKind::Doctor => "doctors",
            RecordKind::Appointment => "appointments",
            RecordKind::Bill => "bills",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Patient => write!(f, "Patient"),
            RecordKind::Doctor => write!(f, "Doctor"),
            RecordKind::Appointment => write!(f, "Appointment"),
            RecordKind::Bill => write!(f, "Bill"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ClinicError {
    /// Referenced id does not resolve to an existing record
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: u32 },

    /// Operation needs at least one record of this kind
    #[error("No {} registered", .kind.plural())]
    EmptyCollection { kind: RecordKind },

    #[error("Doctor {doctor_id} is not available. Appointment cannot be scheduled")]
    DoctorUnavailable { doctor_id: u32 },

    #[error("Patient {patient_id} is not currently admitted")]
    PatientNotAdmitted { patient_id: u32 },

    #[error("Unknown appointment status: {value}")]
    UnknownStatus { value: String },

    #[error("Invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClinicError {
    pub fn not_found(kind: RecordKind, id: u32) -> Self {
        Self::NotFound { kind, id }
    }

    pub fn empty_collection(kind: RecordKind) -> Self {
        Self::EmptyCollection { kind }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for the domain failures the menu reports and then carries on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::EmptyCollection { .. }
                | Self::DoctorUnavailable { .. }
                | Self::PatientNotAdmitted { .. }
                | Self::UnknownStatus { .. }
                | Self::InvalidDate { .. }
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::EmptyCollection { .. } => "empty_collection",
            Self::DoctorUnavailable { .. } => "precondition_failed",
            Self::PatientNotAdmitted { .. } => "precondition_failed",
            Self::UnknownStatus { .. } => "validation",
            Self::InvalidDate { .. } => "validation",
            Self::Configuration { .. } => "configuration",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}
