use serde::{Deserialize, Serialize};

/// Point-in-time counts over the registry collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub patients: usize,
    pub doctors: usize,
    pub appointments: usize,
    pub bills: usize,
    pub admitted_patients: usize,
    pub available_doctors: usize,
    pub unpaid_bills: usize,
    pub outstanding_amount: f64,
}
