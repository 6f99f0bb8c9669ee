use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers;
use crate::EstimateState;

pub fn estimate_routes(state: Arc<EstimateState>) -> Router {
    Router::new()
        .route("/", post(handlers::estimate_cost))
        .with_state(state)
}
