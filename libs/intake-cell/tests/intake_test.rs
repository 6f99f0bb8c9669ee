use intake_cell::models::IntakeForm;
use intake_cell::services::session::SessionStore;
use intake_cell::services::validation::ValidationService;
use serde_json::json;

#[test]
fn accepts_camel_case_payload_with_string_symptoms() {
    let form: IntakeForm = serde_json::from_value(json!({
        "user_id": "u1",
        "primarySymptoms": "Chest Pain, Fatigue",
        "insuranceProvider": "Apollo Munich",
        "city": "Guntur",
        "urgencyLevel": "high",
        "severity": 7
    }))
    .unwrap();

    let criteria = form.to_criteria();
    assert_eq!(criteria.symptoms, vec!["chest pain", "fatigue"]);
    assert_eq!(criteria.insurance, "Apollo Munich");
    assert_eq!(criteria.location.as_deref(), Some("Guntur"));
    assert_eq!(criteria.severity, Some(7));
}

#[test]
fn accepts_array_symptoms() {
    let form: IntakeForm = serde_json::from_value(json!({
        "user_id": "u2",
        "primary_symptoms": ["Skin Rash", "skin rash", "Fever"],
        "insurance_provider": "Star Health",
        "city": "Vijayawada"
    }))
    .unwrap();

    // Same canonical shape as the string form: ordered, lower-case,
    // de-duplicated.
    assert_eq!(form.to_criteria().symptoms, vec!["skin rash", "fever"]);
}

#[test]
fn validated_form_reaches_the_session_store() {
    let form: IntakeForm = serde_json::from_value(json!({
        "user_id": "u3",
        "primarySymptoms": "persistent skin rash",
        "insuranceProvider": "Star Health",
        "city": "Vijayawada"
    }))
    .unwrap();

    let validation = ValidationService::new();
    validation
        .validate(&form, &["Star Health", "Apollo Munich"])
        .unwrap();

    let sessions = SessionStore::new();
    sessions.set_intake(form);

    let stored = sessions.intake("u3").unwrap();
    assert_eq!(stored.city, "Vijayawada");
    assert_eq!(
        stored.to_criteria().symptoms,
        vec!["persistent skin rash"]
    );
}
