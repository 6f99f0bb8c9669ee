use tracing::debug;

use shared_models::{CptCode, InsurancePlan, PatientCriteria};

use crate::models::{CostEstimate, EstimateError};

/// Coverage applied when a plan has no entry for the selected code.
const DEFAULT_COVERAGE: f64 = 0.8;

const COMPLEX_VISIT: &str = "99214";
const LAB_PANEL: &str = "80050";
const STANDARD_VISIT: &str = "99213";

pub struct EstimationService;

impl EstimationService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the expected visit cost for a patient. Pure over its
    /// inputs; both reference-data misses surface as typed errors.
    pub fn estimate_cost(
        &self,
        criteria: &PatientCriteria,
        plans: &[InsurancePlan],
        cpt_codes: &[CptCode],
    ) -> Result<CostEstimate, EstimateError> {
        let plan = plans
            .iter()
            .find(|plan| plan.company == criteria.insurance)
            .ok_or_else(|| EstimateError::UnknownInsurancePlan(criteria.insurance.clone()))?;

        let code = select_cpt_code(&criteria.symptom_text());
        debug!("Selected CPT {} for plan {}", code, plan.company);

        let cpt = cpt_codes
            .iter()
            .find(|cpt| cpt.code == code)
            .ok_or_else(|| EstimateError::UnknownCptCode(code.to_string()))?;

        let coverage_fraction = plan.coverage_for(code).unwrap_or(DEFAULT_COVERAGE);
        let covered_amount = cpt.base_price * coverage_fraction;
        let out_of_pocket_cost = cpt.base_price - covered_amount;

        Ok(CostEstimate {
            cpt_code: cpt.code.clone(),
            cpt_description: cpt.description.clone(),
            insurance: plan.company.clone(),
            base_price: cpt.base_price,
            coverage_fraction,
            covered_amount,
            out_of_pocket_cost,
        })
    }
}

impl Default for EstimationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Priority rules over the symptom text: complex visit for chest pain,
/// lab panel for skin conditions, standard visit otherwise.
pub fn select_cpt_code(symptom_text: &str) -> &'static str {
    let text = symptom_text.to_lowercase();
    if text.contains("chest pain") {
        COMPLEX_VISIT
    } else if text.contains("rash") || text.contains("skin") {
        LAB_PANEL
    } else {
        STANDARD_VISIT
    }
}
