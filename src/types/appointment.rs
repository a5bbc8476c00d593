use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{AppointmentId, DoctorId, PatientId};
use crate::error::ClinicError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn all() -> &'static [AppointmentStatus] {
        &[
            AppointmentStatus::Scheduled,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ]
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Scheduled"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" | "canceled" => Ok(AppointmentStatus::Cancelled),
            _ => Err(ClinicError::UnknownStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// A booked visit. Patient and doctor are linked by id and resolved through
/// the registry, so later changes to either record are always visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub date: NaiveDate,
    /// Free-text label, e.g. "10:30 AM"
    pub time: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn new(
        id: AppointmentId,
        patient_id: PatientId,
        doctor_id: DoctorId,
        date: NaiveDate,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            patient_id,
            doctor_id,
            date,
            time: time.into(),
            status: AppointmentStatus::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "scheduled".parse::<AppointmentStatus>().unwrap(),
            AppointmentStatus::Scheduled
        );
        assert_eq!(
            " Completed ".parse::<AppointmentStatus>().unwrap(),
            AppointmentStatus::Completed
        );
        assert_eq!(
            "canceled".parse::<AppointmentStatus>().unwrap(),
            AppointmentStatus::Cancelled
        );
        assert!("postponed".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn test_new_appointment_is_scheduled() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let appointment =
            Appointment::new(AppointmentId(1), PatientId(1), DoctorId(1), date, "09:30 AM");
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(appointment.status.to_string(), "Scheduled");
    }
}
