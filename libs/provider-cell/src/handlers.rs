use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::{AppError, PatientCriteria};

use crate::models::MatchRequest;
use crate::services::{catalog::CatalogService, matching::MatchingService};
use crate::ProviderState;

#[axum::debug_handler]
pub async fn list_providers(
    State(state): State<Arc<ProviderState>>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(&state.reference);
    let providers = catalog.list();

    Ok(Json(json!({
        "providers": providers,
        "total": providers.len()
    })))
}

#[axum::debug_handler]
pub async fn get_provider(
    State(state): State<Arc<ProviderState>>,
    Path(provider_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(&state.reference);
    let provider = catalog
        .get(&provider_id)
        .ok_or_else(|| AppError::NotFound("Provider not found".to_string()))?;

    Ok(Json(json!(provider)))
}

#[axum::debug_handler]
pub async fn match_providers(
    State(state): State<Arc<ProviderState>>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<Value>, AppError> {
    if request.insurance.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Please select your insurance provider".to_string(),
        ));
    }

    let mut criteria = PatientCriteria::new(request.symptoms, request.insurance);
    criteria.location = request.location;
    criteria.urgency = request.urgency;
    criteria.severity = request.severity;

    let service = MatchingService::new(state.match_limit);
    let matches = service.match_providers(&criteria, state.reference.providers());

    // An empty list is a valid answer: nobody in-network for this
    // insurance. The client renders "no providers found".
    Ok(Json(json!({
        "matches": matches,
        "total": matches.len()
    })))
}
