use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use estimate_cell::models::CostEstimate;
use shared_models::{PatientCriteria, SymptomsField};

/// Patient intake form. Field aliases accept the camelCase names the
/// original web client submits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeForm {
    pub user_id: String,
    #[serde(alias = "primarySymptoms")]
    pub primary_symptoms: SymptomsField,
    #[serde(alias = "insuranceProvider")]
    pub insurance_provider: String,
    #[serde(default, alias = "insurancePlan")]
    pub insurance_plan: Option<String>,
    #[serde(default, alias = "memberId")]
    pub member_id: Option<String>,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, alias = "urgencyLevel")]
    pub urgency_level: Option<String>,
    #[serde(default)]
    pub severity: Option<u8>,
    #[serde(default, alias = "detailedDescription")]
    pub detailed_description: Option<String>,
}

impl IntakeForm {
    /// Canonical criteria handed to the matcher and estimator. Symptom
    /// shape ambiguity (string vs list) ends here.
    pub fn to_criteria(&self) -> PatientCriteria {
        let mut criteria = PatientCriteria::new(
            self.primary_symptoms.clone(),
            self.insurance_provider.clone(),
        );
        criteria.location = Some(self.city.clone());
        criteria.urgency = self.urgency_level.clone();
        criteria.severity = self.severity;
        criteria
    }
}

/// One patient's journey through the flow: intake, provider choice,
/// cached cost estimate. Updated only through the discrete methods on
/// `SessionStore`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatientSession {
    pub intake: Option<IntakeForm>,
    pub selected_provider_id: Option<String>,
    pub cost_estimate: Option<CostEstimate>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),
}

/// Body of POST /intake/{user_id}/provider.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectProviderRequest {
    pub provider_id: String,
}
