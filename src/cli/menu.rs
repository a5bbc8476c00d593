//! The interactive clinic menu.
//!
//! Each action reads typed values through [`Prompt`], hands them to the
//! registry, and prints the outcome. Domain failures are reported and the
//! loop carries on; end of input ends the session like choosing `0`.

use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

use super::prompt::Prompt;
use crate::config::ClinicConfig;
use crate::dates;
use crate::error::{ClinicError, RecordKind, Result};
use crate::registry::ClinicRegistry;
use crate::types::{BillId, DoctorId, PatientId, PaymentOutcome, PersonDetails};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddPatient,
    AddDoctor,
    ScheduleAppointment,
    ViewPatients,
    ViewDoctors,
    ViewPatientAppointments,
    GenerateBill,
    ViewBills,
    MarkBillPaid,
    DischargePatient,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        let choice = match number {
            0 => MenuChoice::Exit,
            1 => MenuChoice::AddPatient,
            2 => MenuChoice::AddDoctor,
            3 => MenuChoice::ScheduleAppointment,
            4 => MenuChoice::ViewPatients,
            5 => MenuChoice::ViewDoctors,
            6 => MenuChoice::ViewPatientAppointments,
            7 => MenuChoice::GenerateBill,
            8 => MenuChoice::ViewBills,
            9 => MenuChoice::MarkBillPaid,
            10 => MenuChoice::DischargePatient,
            _ => return None,
        };
        Some(choice)
    }
}

const MENU: &str = "
===== CLINIC MANAGEMENT SYSTEM =====
1. Add Patient
2. Add Doctor
3. Schedule Appointment
4. View All Patients
5. View All Doctors
6. View Appointments for a Patient
7. Generate Bill
8. View All Bills
9. Mark Bill as Paid
10. Discharge Patient
0. Exit";

/// Operator-facing text for a rejected action
pub fn describe(error: &ClinicError) -> String {
    match error {
        ClinicError::EmptyCollection {
            kind: RecordKind::Bill,
        } => "No bills generated.".to_string(),
        ClinicError::EmptyCollection { kind } => format!("No {} registered.", kind.plural()),
        ClinicError::NotFound { kind, .. } => format!("{kind} not found."),
        ClinicError::DoctorUnavailable { .. } => {
            "Doctor is not available. Appointment cannot be scheduled.".to_string()
        }
        ClinicError::PatientNotAdmitted { .. } => "Patient is not currently admitted.".to_string(),
        other => other.to_string(),
    }
}

fn is_end_of_input(error: &ClinicError) -> bool {
    matches!(error, ClinicError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

pub struct Menu<R, W> {
    registry: ClinicRegistry,
    config: ClinicConfig,
    prompt: Prompt<R, W>,
    today: Option<NaiveDate>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(registry: ClinicRegistry, config: ClinicConfig, input: R, output: W) -> Self {
        Self {
            registry,
            config,
            prompt: Prompt::new(input, output),
            today: None,
        }
    }

    /// Pin the date used for "today" instead of the system clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn registry(&self) -> &ClinicRegistry {
        &self.registry
    }

    pub fn into_parts(self) -> (ClinicRegistry, W) {
        (self.registry, self.prompt.into_output())
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(dates::today)
    }

    /// Run until the operator exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.prompt.say(MENU)?;
            let number = match self.prompt.ask_number::<i64>("Enter your choice: ") {
                Ok(number) => number,
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => return Err(e),
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                self.prompt.say("Invalid choice. Please try again.")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                break;
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => self.prompt.say(describe(&e))?,
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => return Err(e),
            }
        }

        self.prompt.say("Exiting system. Goodbye!")?;
        tracing::info!(stats = ?self.registry.stats(), "Session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        tracing::debug!(?choice, "Menu action");
        match choice {
            MenuChoice::Exit => Ok(()),
            MenuChoice::AddPatient => self.add_patient(),
            MenuChoice::AddDoctor => self.add_doctor(),
            MenuChoice::ScheduleAppointment => self.schedule_appointment(),
            MenuChoice::ViewPatients => self.view_patients(),
            MenuChoice::ViewDoctors => self.view_doctors(),
            MenuChoice::ViewPatientAppointments => self.view_patient_appointments(),
            MenuChoice::GenerateBill => self.generate_bill(),
            MenuChoice::ViewBills => self.view_bills(),
            MenuChoice::MarkBillPaid => self.mark_bill_paid(),
            MenuChoice::DischargePatient => self.discharge_patient(),
        }
    }

    fn ask_person(&mut self) -> Result<PersonDetails> {
        let name = self.prompt.ask("Name: ")?;
        let age = self.prompt.ask_number::<u32>("Age: ")?;
        let gender = self.prompt.ask("Gender: ")?;
        let contact = self.prompt.ask("Contact: ")?;
        Ok(PersonDetails::new(name, age, gender, contact))
    }

    fn ask_date(&mut self, label: &str, fallback_notice: &str) -> Result<NaiveDate> {
        let input = self.prompt.ask(label)?;
        let (date, fell_back) = dates::parse_date_or(&input, &self.config.date_format, self.today());
        if fell_back {
            self.prompt.say(fallback_notice)?;
        }
        Ok(date)
    }

    /// List every patient and read the chosen id
    fn select_patient(&mut self) -> Result<PatientId> {
        self.prompt.say("Select patient by ID:")?;
        let lines: Vec<String> = self
            .registry
            .list_patients()
            .iter()
            .map(|p| format!("{}: {}", p.id, p.name()))
            .collect();
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(PatientId(self.prompt.ask_number("")?))
    }

    fn add_patient(&mut self) -> Result<()> {
        self.prompt.say("\n--- Add Patient ---")?;
        let person = self.ask_person()?;
        let disease = self.prompt.ask("Disease: ")?;

        let admission_date = if self.prompt.ask_yes_no("Is admitted? (yes/no): ")? {
            Some(self.ask_date(
                "Admission date (yyyy-mm-dd): ",
                "Invalid date format. Setting admission date to today.",
            )?)
        } else {
            None
        };

        let id = self
            .registry
            .register_patient(person, disease, admission_date)
            .id;
        self.prompt
            .say(format!("Patient added successfully. ID: {id}"))
    }

    fn add_doctor(&mut self) -> Result<()> {
        self.prompt.say("\n--- Add Doctor ---")?;
        let person = self.ask_person()?;
        let specialization = self.prompt.ask("Specialization: ")?;
        let available = self.prompt.ask_yes_no("Is available? (yes/no): ")?;

        let id = self
            .registry
            .register_doctor(person, specialization, available)
            .id;
        self.prompt
            .say(format!("Doctor added successfully. ID: {id}"))
    }

    fn schedule_appointment(&mut self) -> Result<()> {
        self.prompt.say("\n--- Schedule Appointment ---")?;
        self.registry.ensure_not_empty(RecordKind::Patient)?;
        self.registry.ensure_not_empty(RecordKind::Doctor)?;

        let patient_id = self.select_patient()?;
        self.registry.patient(patient_id)?;

        self.prompt.say("Select doctor by ID:")?;
        let lines: Vec<String> = self
            .registry
            .list_doctors()
            .iter()
            .map(|d| format!("{}: {} ({})", d.id, d.name(), d.specialization))
            .collect();
        for line in lines {
            self.prompt.say(line)?;
        }
        let doctor_id = DoctorId(self.prompt.ask_number("")?);

        // Refuse before asking for the date and time
        if !self.registry.doctor(doctor_id)?.available {
            return Err(ClinicError::DoctorUnavailable {
                doctor_id: doctor_id.get(),
            });
        }

        let date = self.ask_date(
            "Appointment date (yyyy-mm-dd): ",
            "Invalid date. Using current date.",
        )?;
        let time = self.prompt.ask("Appointment time (e.g., 10:30 AM): ")?;

        let id = self
            .registry
            .schedule_appointment(patient_id, doctor_id, date, time)?
            .id;
        self.prompt
            .say(format!("Appointment scheduled successfully. ID: {id}"))
    }

    fn view_patients(&mut self) -> Result<()> {
        self.prompt.say("\n--- List of Patients ---")?;
        let lines: Vec<String> = self
            .registry
            .list_patients()
            .iter()
            .map(ToString::to_string)
            .collect();
        if lines.is_empty() {
            return self.prompt.say("No patients registered.");
        }
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn view_doctors(&mut self) -> Result<()> {
        self.prompt.say("\n--- List of Doctors ---")?;
        let lines: Vec<String> = self
            .registry
            .list_doctors()
            .iter()
            .map(ToString::to_string)
            .collect();
        if lines.is_empty() {
            return self.prompt.say("No doctors registered.");
        }
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn view_patient_appointments(&mut self) -> Result<()> {
        self.prompt.say("\n--- View Appointments for Patient ---")?;
        self.registry.ensure_not_empty(RecordKind::Patient)?;

        let patient_id = self.select_patient()?;
        // Existence is checked here; the registry query does not tell
        // "unknown patient" apart from "no appointments"
        self.registry.patient(patient_id)?;

        let lines = self
            .registry
            .appointments_for_patient(patient_id)
            .map(|a| {
                self.registry
                    .appointment_summary(a)
                    .map(|summary| summary.to_string())
            })
            .collect::<Result<Vec<_>>>()?;

        if lines.is_empty() {
            return self.prompt.say("No appointments found for this patient.");
        }
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn generate_bill(&mut self) -> Result<()> {
        self.prompt.say("\n--- Generate Bill ---")?;
        self.registry.ensure_not_empty(RecordKind::Patient)?;

        let patient_id = self.select_patient()?;
        self.registry.patient(patient_id)?;

        let label = format!("Bill amount: {}", self.config.currency_symbol);
        let amount = self.prompt.ask_number::<f64>(&label)?;
        let today = self.today();

        let id = self.registry.generate_bill(patient_id, amount, today)?.id;
        self.prompt
            .say(format!("Bill generated successfully. Bill ID: {id}"))
    }

    fn view_bills(&mut self) -> Result<()> {
        self.prompt.say("\n--- List of Bills ---")?;
        let currency = self.config.currency_symbol.as_str();
        let lines = self
            .registry
            .list_bills()
            .iter()
            .map(|b| {
                self.registry
                    .bill_summary(b)
                    .map(|summary| summary.with_currency(currency).to_string())
            })
            .collect::<Result<Vec<_>>>()?;

        if lines.is_empty() {
            return self.prompt.say("No bills generated.");
        }
        for line in lines {
            self.prompt.say(line)?;
        }
        Ok(())
    }

    fn mark_bill_paid(&mut self) -> Result<()> {
        self.prompt.say("\n--- Mark Bill as Paid ---")?;
        self.registry.ensure_not_empty(RecordKind::Bill)?;

        let bill_id = BillId(self.prompt.ask_number("Enter Bill ID: ")?);
        match self.registry.mark_bill_paid(bill_id)? {
            PaymentOutcome::Paid => self.prompt.say("Bill marked as paid."),
            PaymentOutcome::AlreadyPaid => self.prompt.say("Bill is already marked as paid."),
        }
    }

    fn discharge_patient(&mut self) -> Result<()> {
        self.prompt.say("\n--- Discharge Patient ---")?;
        self.registry.ensure_not_empty(RecordKind::Patient)?;

        self.prompt.say("Select patient by ID:")?;
        let lines: Vec<String> = self
            .registry
            .admitted_patients()
            .map(|p| format!("{}: {}", p.id, p.name()))
            .collect();
        for line in lines {
            self.prompt.say(line)?;
        }
        let patient_id = PatientId(self.prompt.ask_number("")?);

        self.registry.discharge_patient(patient_id)?;
        self.prompt.say("Patient discharged successfully.")
    }
}
