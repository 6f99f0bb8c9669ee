use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_models::{AppError, PatientCriteria};

use crate::models::{EstimateError, EstimateRequest};
use crate::services::estimation::EstimationService;
use crate::EstimateState;

#[axum::debug_handler]
pub async fn estimate_cost(
    State(state): State<Arc<EstimateState>>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<Value>, AppError> {
    if request.insurance.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Please select your insurance provider".to_string(),
        ));
    }

    let criteria = PatientCriteria::new(request.symptoms, request.insurance);
    let service = EstimationService::new();

    let estimate = service
        .estimate_cost(
            &criteria,
            state.reference.plans(),
            state.reference.cpt_codes(),
        )
        .map_err(|err: EstimateError| AppError::Unprocessable(err.to_string()))?;

    let coverage_percentage = estimate.coverage_percentage();
    Ok(Json(json!({
        "estimate": estimate,
        "coverage_percentage": coverage_percentage
    })))
}
