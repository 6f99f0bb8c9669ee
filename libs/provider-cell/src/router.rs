use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::ProviderState;

pub fn provider_routes(state: Arc<ProviderState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_providers))
        .route("/match", post(handlers::match_providers))
        .route("/{provider_id}", get(handlers::get_provider))
        .with_state(state)
}
