use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{ClinicRegistry, RegistryStats};
use crate::error::Result;
use crate::types::{
    Appointment, AppointmentId, AppointmentStatus, Bill, BillId, Doctor, DoctorId, Patient,
    PatientId, PaymentOutcome, PersonDetails,
};

/// A registry shared between concurrent callers.
///
/// Mutations hold the write lock for the whole check-allocate-append step,
/// so id allocation never races. Reads take the read lock and return owned
/// snapshots. Clones share the same underlying registry.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<ClinicRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: ClinicRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Run a read-only closure against the registry
    pub async fn read<R>(&self, f: impl FnOnce(&ClinicRegistry) -> R) -> R {
        let registry = self.inner.read().await;
        f(&registry)
    }

    /// Run a mutating closure with exclusive access
    pub async fn write<R>(&self, f: impl FnOnce(&mut ClinicRegistry) -> R) -> R {
        let mut registry = self.inner.write().await;
        f(&mut registry)
    }

    pub async fn register_patient(
        &self,
        person: PersonDetails,
        disease: impl Into<String>,
        admission_date: Option<NaiveDate>,
    ) -> Patient {
        let mut registry = self.inner.write().await;
        registry
            .register_patient(person, disease, admission_date)
            .clone()
    }

    pub async fn register_doctor(
        &self,
        person: PersonDetails,
        specialization: impl Into<String>,
        available: bool,
    ) -> Doctor {
        let mut registry = self.inner.write().await;
        registry
            .register_doctor(person, specialization, available)
            .clone()
    }

    pub async fn schedule_appointment(
        &self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        date: NaiveDate,
        time: impl Into<String>,
    ) -> Result<Appointment> {
        let mut registry = self.inner.write().await;
        registry
            .schedule_appointment(patient_id, doctor_id, date, time)
            .cloned()
    }

    pub async fn update_appointment_status(
        &self,
        appointment_id: AppointmentId,
        status: AppointmentStatus,
    ) -> Result<AppointmentStatus> {
        let mut registry = self.inner.write().await;
        registry.update_appointment_status(appointment_id, status)
    }

    pub async fn generate_bill(
        &self,
        patient_id: PatientId,
        amount: f64,
        issued_on: NaiveDate,
    ) -> Result<Bill> {
        let mut registry = self.inner.write().await;
        registry.generate_bill(patient_id, amount, issued_on).cloned()
    }

    pub async fn mark_bill_paid(&self, bill_id: BillId) -> Result<PaymentOutcome> {
        let mut registry = self.inner.write().await;
        registry.mark_bill_paid(bill_id)
    }

    pub async fn discharge_patient(&self, patient_id: PatientId) -> Result<()> {
        let mut registry = self.inner.write().await;
        registry.discharge_patient(patient_id)
    }

    pub async fn list_patients(&self) -> Vec<Patient> {
        self.read(|r| r.list_patients().to_vec()).await
    }

    pub async fn list_doctors(&self) -> Vec<Doctor> {
        self.read(|r| r.list_doctors().to_vec()).await
    }

    pub async fn list_bills(&self) -> Vec<Bill> {
        self.read(|r| r.list_bills().to_vec()).await
    }

    pub async fn appointments_for_patient(&self, patient_id: PatientId) -> Vec<Appointment> {
        self.read(|r| r.appointments_for_patient(patient_id).cloned().collect())
            .await
    }

    pub async fn stats(&self) -> RegistryStats {
        self.read(ClinicRegistry::stats).await
    }
}
