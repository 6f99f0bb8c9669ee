use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::SymptomsField;

/// Body of POST /estimates.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRequest {
    pub symptoms: SymptomsField,
    pub insurance: String,
}

/// Cost breakdown for the expected visit. Amounts are unrounded;
/// two-decimal formatting is a presentation concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    pub cpt_code: String,
    pub cpt_description: String,
    pub insurance: String,
    pub base_price: f64,
    pub coverage_fraction: f64,
    pub covered_amount: f64,
    pub out_of_pocket_cost: f64,
}

impl CostEstimate {
    /// Coverage as the percentage figure shown to patients.
    pub fn coverage_percentage(&self) -> f64 {
        self.coverage_fraction * 100.0
    }
}

/// Reference-data misses the caller can act on; never partial numbers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    #[error("Insurance company '{0}' is not recognized, please update your insurance information")]
    UnknownInsurancePlan(String),

    #[error("No pricing available for procedure code {0}")]
    UnknownCptCode(String),
}
