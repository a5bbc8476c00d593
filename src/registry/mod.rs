//! The clinic registry.
//!
//! [`ClinicRegistry`] owns the patient, doctor, appointment and bill
//! collections together with their id counters. Every operation is a single
//! check-then-mutate step: preconditions are verified first and nothing is
//! touched when one fails. Records are never removed; only their status
//! fields change.

mod sample;
pub mod sequence;
pub mod shared;
pub mod stats;

pub use sequence::IdSequence;
pub use shared::SharedRegistry;
pub use stats::RegistryStats;

use chrono::NaiveDate;

use crate::error::{ClinicError, RecordKind, Result};
use crate::types::{
    Appointment, AppointmentId, AppointmentStatus, AppointmentSummary, Bill, BillId, BillSummary,
    DEFAULT_CURRENCY_SYMBOL, Doctor, DoctorId, PatientId, Patient, PaymentOutcome, PersonDetails,
};

pub const FIRST_PATIENT_ID: u32 = 1;
pub const FIRST_DOCTOR_ID: u32 = 1;
pub const FIRST_APPOINTMENT_ID: u32 = 1;
pub const FIRST_BILL_ID: u32 = 1000;

#[derive(Debug, Clone)]
pub struct ClinicRegistry {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    bills: Vec<Bill>,
    patient_ids: IdSequence,
    doctor_ids: IdSequence,
    appointment_ids: IdSequence,
    bill_ids: IdSequence,
}

/// Logs a rejected operation and hands the error back
fn rejected(operation: &'static str, error: ClinicError) -> ClinicError {
    tracing::warn!(operation, category = error.category(), "{}", error);
    error
}

impl ClinicRegistry {
    /// Create an empty registry with fresh id counters
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            doctors: Vec::new(),
            appointments: Vec::new(),
            bills: Vec::new(),
            patient_ids: IdSequence::starting_at(FIRST_PATIENT_ID),
            doctor_ids: IdSequence::starting_at(FIRST_DOCTOR_ID),
            appointment_ids: IdSequence::starting_at(FIRST_APPOINTMENT_ID),
            bill_ids: IdSequence::starting_at(FIRST_BILL_ID),
        }
    }

    /// Register a patient. `admission_date` present means the patient is admitted.
    pub fn register_patient(
        &mut self,
        person: PersonDetails,
        disease: impl Into<String>,
        admission_date: Option<NaiveDate>,
    ) -> &Patient {
        let id = PatientId(self.patient_ids.allocate());
        let patient = Patient::new(id, person, disease, admission_date);

        tracing::info!(
            patient_id = %id,
            admitted = patient.is_admitted(),
            "Registered patient {}",
            patient.name()
        );

        self.patients.push(patient);
        &self.patients[self.patients.len() - 1]
    }

    pub fn register_doctor(
        &mut self,
        person: PersonDetails,
        specialization: impl Into<String>,
        available: bool,
    ) -> &Doctor {
        let id = DoctorId(self.doctor_ids.allocate());
        let doctor = Doctor::new(id, person, specialization, available);

        tracing::info!(
            doctor_id = %id,
            available,
            "Registered doctor {}",
            doctor.name()
        );

        self.doctors.push(doctor);
        &self.doctors[self.doctors.len() - 1]
    }

    /// Book an appointment with status `Scheduled`.
    ///
    /// Checks, in order: patients exist, doctors exist, the patient resolves,
    /// the doctor resolves, the doctor is available. Double-booking is not
    /// detected.
    pub fn schedule_appointment(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        date: NaiveDate,
        time: impl Into<String>,
    ) -> Result<&Appointment> {
        self.check_schedulable(patient_id, doctor_id)
            .map_err(|e| rejected("schedule_appointment", e))?;

        let id = AppointmentId(self.appointment_ids.allocate());
        let appointment = Appointment::new(id, patient_id, doctor_id, date, time);

        tracing::info!(
            appointment_id = %id,
            patient_id = %patient_id,
            doctor_id = %doctor_id,
            %date,
            "Scheduled appointment"
        );

        self.appointments.push(appointment);
        Ok(&self.appointments[self.appointments.len() - 1])
    }

    fn check_schedulable(&self, patient_id: PatientId, doctor_id: DoctorId) -> Result<()> {
        self.ensure_not_empty(RecordKind::Patient)?;
        self.ensure_not_empty(RecordKind::Doctor)?;
        self.patient(patient_id)?;

        let doctor = self.doctor(doctor_id)?;
        if !doctor.available {
            return Err(ClinicError::DoctorUnavailable {
                doctor_id: doctor_id.get(),
            });
        }

        Ok(())
    }

    /// Change the status of an existing appointment, returning the previous one
    pub fn update_appointment_status(
        &mut self,
        appointment_id: AppointmentId,
        status: AppointmentStatus,
    ) -> Result<AppointmentStatus> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == appointment_id)
            .ok_or_else(|| {
                rejected(
                    "update_appointment_status",
                    ClinicError::not_found(RecordKind::Appointment, appointment_id.get()),
                )
            })?;

        let previous = std::mem::replace(&mut appointment.status, status);
        tracing::info!(
            appointment_id = %appointment_id,
            %previous,
            %status,
            "Updated appointment status"
        );
        Ok(previous)
    }

    /// Issue an unpaid bill. The amount is taken as given.
    pub fn generate_bill(
        &mut self,
        patient_id: PatientId,
        amount: f64,
        issued_on: NaiveDate,
    ) -> Result<&Bill> {
        self.ensure_not_empty(RecordKind::Patient)
            .and_then(|_| self.patient(patient_id).map(|_| ()))
            .map_err(|e| rejected("generate_bill", e))?;

        let id = BillId(self.bill_ids.allocate());
        let bill = Bill::new(id, patient_id, amount, issued_on);

        tracing::info!(bill_id = %id, patient_id = %patient_id, amount, "Generated bill");

        self.bills.push(bill);
        Ok(&self.bills[self.bills.len() - 1])
    }

    /// Mark a bill as paid. An already-paid bill is left untouched and
    /// reported as [`PaymentOutcome::AlreadyPaid`].
    pub fn mark_bill_paid(&mut self, bill_id: BillId) -> Result<PaymentOutcome> {
        self.ensure_not_empty(RecordKind::Bill)
            .map_err(|e| rejected("mark_bill_paid", e))?;

        let bill = self
            .bills
            .iter_mut()
            .find(|b| b.id == bill_id)
            .ok_or_else(|| {
                rejected(
                    "mark_bill_paid",
                    ClinicError::not_found(RecordKind::Bill, bill_id.get()),
                )
            })?;

        if bill.paid {
            tracing::debug!(bill_id = %bill_id, "Bill already paid");
            return Ok(PaymentOutcome::AlreadyPaid);
        }

        bill.paid = true;
        tracing::info!(bill_id = %bill_id, "Bill marked as paid");
        Ok(PaymentOutcome::Paid)
    }

    /// Discharge an admitted patient, clearing the admission date
    pub fn discharge_patient(&mut self, patient_id: PatientId) -> Result<()> {
        self.ensure_not_empty(RecordKind::Patient)
            .map_err(|e| rejected("discharge_patient", e))?;

        let patient = self
            .patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .ok_or_else(|| {
                rejected(
                    "discharge_patient",
                    ClinicError::not_found(RecordKind::Patient, patient_id.get()),
                )
            })?;

        match patient.discharge() {
            Some(admitted_on) => {
                tracing::info!(patient_id = %patient_id, %admitted_on, "Discharged patient");
                Ok(())
            }
            None => Err(rejected(
                "discharge_patient",
                ClinicError::PatientNotAdmitted {
                    patient_id: patient_id.get(),
                },
            )),
        }
    }

    pub fn list_patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn list_doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn list_appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn list_bills(&self) -> &[Bill] {
        &self.bills
    }

    /// Appointments booked for `patient_id`, in booking order.
    ///
    /// An unknown id yields nothing; callers that need to tell the two apart
    /// check [`ClinicRegistry::patient`] first.
    pub fn appointments_for_patient(
        &self,
        patient_id: PatientId,
    ) -> impl Iterator<Item = &Appointment> + '_ {
        self.appointments
            .iter()
            .filter(move |a| a.patient_id == patient_id)
    }

    pub fn admitted_patients(&self) -> impl Iterator<Item = &Patient> + '_ {
        self.patients.iter().filter(|p| p.is_admitted())
    }

    pub fn find_patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn find_doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn find_appointment(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn find_bill(&self, id: BillId) -> Option<&Bill> {
        self.bills.iter().find(|b| b.id == id)
    }

    pub fn patient(&self, id: PatientId) -> Result<&Patient> {
        self.find_patient(id)
            .ok_or_else(|| ClinicError::not_found(RecordKind::Patient, id.get()))
    }

    pub fn doctor(&self, id: DoctorId) -> Result<&Doctor> {
        self.find_doctor(id)
            .ok_or_else(|| ClinicError::not_found(RecordKind::Doctor, id.get()))
    }

    pub fn bill(&self, id: BillId) -> Result<&Bill> {
        self.find_bill(id)
            .ok_or_else(|| ClinicError::not_found(RecordKind::Bill, id.get()))
    }

    /// Resolve the linked patient and doctor for display
    pub fn appointment_summary<'a>(
        &'a self,
        appointment: &'a Appointment,
    ) -> Result<AppointmentSummary<'a>> {
        Ok(AppointmentSummary {
            appointment,
            patient: self.patient(appointment.patient_id)?,
            doctor: self.doctor(appointment.doctor_id)?,
        })
    }

    pub fn bill_summary<'a>(&'a self, bill: &'a Bill) -> Result<BillSummary<'a>> {
        Ok(BillSummary {
            bill,
            patient: self.patient(bill.patient_id)?,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL,
        })
    }

    pub fn stats(&self) -> RegistryStats {
        let unpaid = self.bills.iter().filter(|b| !b.paid);

        RegistryStats {
            patients: self.patients.len(),
            doctors: self.doctors.len(),
            appointments: self.appointments.len(),
            bills: self.bills.len(),
            admitted_patients: self.admitted_patients().count(),
            available_doctors: self.doctors.iter().filter(|d| d.available).count(),
            unpaid_bills: unpaid.clone().count(),
            outstanding_amount: unpaid.map(|b| b.amount).sum(),
        }
    }

    /// Fails with `EmptyCollection` when no record of `kind` exists
    pub fn ensure_not_empty(&self, kind: RecordKind) -> Result<()> {
        let empty = match kind {
            RecordKind::Patient => self.patients.is_empty(),
            RecordKind::Doctor => self.doctors.is_empty(),
            RecordKind::Appointment => self.appointments.is_empty(),
            RecordKind::Bill => self.bills.is_empty(),
        };

        if empty {
            Err(ClinicError::empty_collection(kind))
        } else {
            Ok(())
        }
    }
}

impl Default for ClinicRegistry {
    fn default() -> Self {
        Self::new()
    }
}
