use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BillId, PatientId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub patient_id: PatientId,
    /// Accepted as given; sign is the caller's concern
    pub amount: f64,
    pub issued_on: NaiveDate,
    pub paid: bool,
}

impl Bill {
    pub fn new(id: BillId, patient_id: PatientId, amount: f64, issued_on: NaiveDate) -> Self {
        Self {
            id,
            patient_id,
            amount,
            issued_on,
            paid: false,
        }
    }
}

/// Result of marking a bill as paid. Both are successful completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Paid,
    AlreadyPaid,
}
