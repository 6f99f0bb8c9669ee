use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use estimate_cell::services::estimation::EstimationService;
use shared_models::AppError;

use crate::models::{IntakeError, IntakeForm, SelectProviderRequest};
use crate::services::validation::ValidationService;
use crate::IntakeState;

impl From<IntakeError> for AppError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::Validation(msg) => AppError::ValidationError(msg),
            IntakeError::NotFound(msg) => AppError::NotFound(msg),
        }
    }
}

#[axum::debug_handler]
pub async fn submit_intake(
    State(state): State<Arc<IntakeState>>,
    Json(form): Json<IntakeForm>,
) -> Result<Json<Value>, AppError> {
    let validation = ValidationService::new();
    validation.validate(&form, &state.reference.known_insurers())?;

    info!("Intake received for user {}", form.user_id);
    let criteria = form.to_criteria();
    state.sessions.set_intake(form);

    Ok(Json(json!({
        "status": "accepted",
        "criteria": criteria
    })))
}

#[axum::debug_handler]
pub async fn get_intake(
    State(state): State<Arc<IntakeState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let intake = state
        .sessions
        .intake(&user_id)
        .ok_or_else(|| AppError::NotFound("Intake form not found".to_string()))?;

    Ok(Json(json!(intake)))
}

#[axum::debug_handler]
pub async fn select_provider(
    State(state): State<Arc<IntakeState>>,
    Path(user_id): Path<String>,
    Json(request): Json<SelectProviderRequest>,
) -> Result<Json<Value>, AppError> {
    let provider = state
        .reference
        .provider(&request.provider_id)
        .ok_or_else(|| AppError::NotFound("Provider not found".to_string()))?
        .clone();

    let intake = state
        .sessions
        .intake(&user_id)
        .ok_or_else(|| AppError::NotFound("Intake form not found".to_string()))?;

    // Cache the cost estimate alongside the selection; an estimator miss
    // leaves it unset rather than blocking the choice of provider.
    let estimation = EstimationService::new();
    let estimate = estimation
        .estimate_cost(
            &intake.to_criteria(),
            state.reference.plans(),
            state.reference.cpt_codes(),
        )
        .ok();

    state
        .sessions
        .select_provider(&user_id, provider.id.clone(), estimate)?;

    let session = state.sessions.get(&user_id);
    Ok(Json(json!({
        "session": session,
        "provider": provider
    })))
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<Arc<IntakeState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let session = state
        .sessions
        .get(&user_id)
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    let provider = session
        .selected_provider_id
        .as_deref()
        .and_then(|id| state.reference.provider(id))
        .cloned();

    Ok(Json(json!({
        "session": session,
        "provider": provider
    })))
}

#[axum::debug_handler]
pub async fn reset_session(
    State(state): State<Arc<IntakeState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if !state.sessions.reset(&user_id) {
        return Err(AppError::NotFound("Session not found".to_string()));
    }

    Ok(Json(json!({ "status": "reset" })))
}
