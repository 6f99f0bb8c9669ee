use regex::Regex;
use tracing::debug;

use crate::models::{IntakeError, IntakeForm};

const MIN_SYMPTOM_CHARS: usize = 10;
const MAX_SYMPTOM_CHARS: usize = 500;
const MIN_LOCATION_CHARS: usize = 3;
const MAX_LOCATION_CHARS: usize = 100;

const INJECTION_PATTERNS: &[&str] = &[
    r"(?i)<script",
    r"(?i)javascript:",
    r"(?i)on\w+\s*=",
    r"(?i)<iframe",
    r"(?i)<object",
];

pub struct ValidationService {
    injection_patterns: Vec<Regex>,
}

impl ValidationService {
    pub fn new() -> Self {
        let injection_patterns = INJECTION_PATTERNS
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect();

        Self { injection_patterns }
    }

    /// Validate an intake form against the known insurers. Failures are
    /// phrased for the patient, not for a stack trace.
    pub fn validate(&self, form: &IntakeForm, known_insurers: &[&str]) -> Result<(), IntakeError> {
        self.validate_symptoms(form)?;
        self.validate_location(form)?;
        self.validate_insurance(form, known_insurers)?;
        self.validate_severity(form)?;
        debug!("Intake form for user {} passed validation", form.user_id);
        Ok(())
    }

    fn validate_symptoms(&self, form: &IntakeForm) -> Result<(), IntakeError> {
        let tags = form.primary_symptoms.clone().into_tags();
        if tags.is_empty() {
            return Err(IntakeError::Validation(
                "Please describe your symptoms".to_string(),
            ));
        }

        let joined = tags.join(", ");
        if joined.len() < MIN_SYMPTOM_CHARS {
            return Err(IntakeError::Validation(
                "Please provide more detailed symptoms (at least 10 characters)".to_string(),
            ));
        }
        if joined.len() > MAX_SYMPTOM_CHARS {
            return Err(IntakeError::Validation(
                "Symptoms description is too long (maximum 500 characters)".to_string(),
            ));
        }

        for pattern in &self.injection_patterns {
            if pattern.is_match(&joined) {
                return Err(IntakeError::Validation(
                    "Invalid content detected in symptoms".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn validate_location(&self, form: &IntakeForm) -> Result<(), IntakeError> {
        let city = form.city.trim();
        if city.is_empty() {
            return Err(IntakeError::Validation(
                "Please enter your location".to_string(),
            ));
        }
        if city.len() < MIN_LOCATION_CHARS {
            return Err(IntakeError::Validation(
                "Location must be at least 3 characters".to_string(),
            ));
        }
        if city.len() > MAX_LOCATION_CHARS {
            return Err(IntakeError::Validation(
                "Location is too long (maximum 100 characters)".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_insurance(
        &self,
        form: &IntakeForm,
        known_insurers: &[&str],
    ) -> Result<(), IntakeError> {
        if form.insurance_provider.trim().is_empty() {
            return Err(IntakeError::Validation(
                "Please select your insurance provider".to_string(),
            ));
        }
        if !known_insurers.contains(&form.insurance_provider.as_str()) {
            return Err(IntakeError::Validation(
                "Please select a valid insurance provider".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_severity(&self, form: &IntakeForm) -> Result<(), IntakeError> {
        if let Some(severity) = form.severity {
            if !(1..=10).contains(&severity) {
                return Err(IntakeError::Validation(
                    "Severity must be between 1 and 10".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_models::SymptomsField;

    fn form(symptoms: &str, city: &str, insurance: &str) -> IntakeForm {
        IntakeForm {
            user_id: "user_1".to_string(),
            primary_symptoms: SymptomsField::Text(symptoms.to_string()),
            insurance_provider: insurance.to_string(),
            insurance_plan: None,
            member_id: None,
            city: city.to_string(),
            address: None,
            state: None,
            pincode: None,
            duration: None,
            urgency_level: None,
            severity: Some(5),
            detailed_description: None,
        }
    }

    const INSURERS: &[&str] = &["Apollo Munich", "Star Health"];

    #[test]
    fn accepts_a_complete_form() {
        let service = ValidationService::new();
        let result = service.validate(&form("persistent chest pain", "Guntur", "Apollo Munich"), INSURERS);
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_empty_and_short_symptoms() {
        let service = ValidationService::new();
        assert_matches!(
            service.validate(&form("", "Guntur", "Apollo Munich"), INSURERS),
            Err(IntakeError::Validation(msg)) => assert!(msg.contains("describe"))
        );
        assert_matches!(
            service.validate(&form("cough", "Guntur", "Apollo Munich"), INSURERS),
            Err(IntakeError::Validation(msg)) => assert!(msg.contains("detailed"))
        );
    }

    #[test]
    fn rejects_script_injection() {
        let service = ValidationService::new();
        assert_matches!(
            service.validate(
                &form("<script>alert(1)</script> headache", "Guntur", "Apollo Munich"),
                INSURERS
            ),
            Err(IntakeError::Validation(msg)) => assert!(msg.contains("Invalid content"))
        );
    }

    #[test]
    fn rejects_unknown_insurer() {
        let service = ValidationService::new();
        assert_matches!(
            service.validate(&form("persistent chest pain", "Guntur", "XYZ Unknown Co"), INSURERS),
            Err(IntakeError::Validation(msg)) => assert!(msg.contains("valid insurance"))
        );
    }

    #[test]
    fn rejects_out_of_range_severity() {
        let service = ValidationService::new();
        let mut bad = form("persistent chest pain", "Guntur", "Star Health");
        bad.severity = Some(11);
        assert_matches!(
            service.validate(&bad, INSURERS),
            Err(IntakeError::Validation(msg)) => assert!(msg.contains("Severity"))
        );
    }

    #[test]
    fn rejects_short_location() {
        let service = ValidationService::new();
        assert_matches!(
            service.validate(&form("persistent chest pain", "Gu", "Star Health"), INSURERS),
            Err(IntakeError::Validation(msg)) => assert!(msg.contains("at least 3"))
        );
    }
}
