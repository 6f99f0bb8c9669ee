use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use tracing::debug;

use estimate_cell::models::CostEstimate;

use crate::models::{IntakeError, IntakeForm, PatientSession};

/// In-memory session state keyed by user id. One discrete update method
/// per action; handlers never mutate sessions directly.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, PatientSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the intake form; re-submitting replaces the previous form
    /// and invalidates any provider selection made against it.
    pub fn set_intake(&self, form: IntakeForm) {
        let mut sessions = self.sessions.write().unwrap();
        let session = sessions.entry(form.user_id.clone()).or_default();
        session.intake = Some(form);
        session.selected_provider_id = None;
        session.cost_estimate = None;
        session.updated_at = Some(Utc::now());
    }

    pub fn select_provider(
        &self,
        user_id: &str,
        provider_id: String,
        estimate: Option<CostEstimate>,
    ) -> Result<(), IntakeError> {
        let mut sessions = self.sessions.write().unwrap();
        let session = sessions
            .get_mut(user_id)
            .filter(|session| session.intake.is_some())
            .ok_or_else(|| IntakeError::NotFound("Intake form not found".to_string()))?;

        debug!("User {} selected provider {}", user_id, provider_id);
        session.selected_provider_id = Some(provider_id);
        session.cost_estimate = estimate;
        session.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn get(&self, user_id: &str) -> Option<PatientSession> {
        self.sessions.read().unwrap().get(user_id).cloned()
    }

    pub fn intake(&self, user_id: &str) -> Option<IntakeForm> {
        self.sessions
            .read()
            .unwrap()
            .get(user_id)
            .and_then(|session| session.intake.clone())
    }

    /// Drop the whole session (the original flow's RESET_DATA).
    pub fn reset(&self, user_id: &str) -> bool {
        self.sessions.write().unwrap().remove(user_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_models::SymptomsField;

    fn intake(user_id: &str) -> IntakeForm {
        IntakeForm {
            user_id: user_id.to_string(),
            primary_symptoms: SymptomsField::Text("persistent chest pain".to_string()),
            insurance_provider: "Apollo Munich".to_string(),
            insurance_plan: None,
            member_id: None,
            city: "Guntur".to_string(),
            address: None,
            state: None,
            pincode: None,
            duration: None,
            urgency_level: None,
            severity: Some(6),
            detailed_description: None,
        }
    }

    #[test]
    fn resubmitting_intake_clears_provider_selection() {
        let store = SessionStore::new();
        store.set_intake(intake("u1"));
        store
            .select_provider("u1", "prov_001".to_string(), None)
            .unwrap();

        store.set_intake(intake("u1"));
        let session = store.get("u1").unwrap();
        assert!(session.intake.is_some());
        assert!(session.selected_provider_id.is_none());
        assert!(session.cost_estimate.is_none());
    }

    #[test]
    fn selecting_without_intake_is_not_found() {
        let store = SessionStore::new();
        assert_matches!(
            store.select_provider("ghost", "prov_001".to_string(), None),
            Err(IntakeError::NotFound(_))
        );
    }

    #[test]
    fn reset_removes_the_session() {
        let store = SessionStore::new();
        store.set_intake(intake("u1"));
        assert!(store.reset("u1"));
        assert!(!store.reset("u1"));
        assert!(store.get("u1").is_none());
    }
}
