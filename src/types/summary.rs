//! Display views that resolve id links into names

use std::fmt;

use super::{Appointment, Bill, Doctor, Patient, person::yes_no};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, Copy)]
pub struct AppointmentSummary<'a> {
    pub appointment: &'a Appointment,
    pub patient: &'a Patient,
    pub doctor: &'a Doctor,
}

impl fmt::Display for AppointmentSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment ID: {}, Patient: {}, Doctor: {}, Date: {}, Time: {}, Status: {}",
            self.appointment.id,
            self.patient.name(),
            self.doctor.name(),
            self.appointment.date,
            self.appointment.time,
            self.appointment.status
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BillSummary<'a> {
    pub bill: &'a Bill,
    pub patient: &'a Patient,
    pub currency_symbol: &'a str,
}

impl<'a> BillSummary<'a> {
    pub fn with_currency(mut self, currency_symbol: &'a str) -> Self {
        self.currency_symbol = currency_symbol;
        self
    }
}

impl fmt::Display for BillSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bill ID: {}, Patient: {}, Amount: {}{:.2}, Date: {}, Paid: {}",
            self.bill.id,
            self.patient.name(),
            self.currency_symbol,
            self.bill.amount,
            self.bill.issued_on,
            yes_no(self.bill.paid)
        )
    }
}
