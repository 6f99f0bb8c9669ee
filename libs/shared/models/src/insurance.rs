use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An insurance company's plan with per-CPT coverage fractions in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsurancePlan {
    pub id: String,
    pub company: String,
    pub plan: String,
    pub cpt_coverage: HashMap<String, f64>,
}

impl InsurancePlan {
    pub fn coverage_for(&self, cpt_code: &str) -> Option<f64> {
        self.cpt_coverage.get(cpt_code).copied()
    }
}

/// Standardized procedure billing code with its base price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CptCode {
    pub code: String,
    pub description: String,
    pub base_price: f64,
}
