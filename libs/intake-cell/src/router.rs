use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::IntakeState;

pub fn intake_routes(state: Arc<IntakeState>) -> Router {
    Router::new()
        .route("/", post(handlers::submit_intake))
        .route("/{user_id}", get(handlers::get_intake))
        .route("/{user_id}/provider", post(handlers::select_provider))
        .route(
            "/{user_id}/session",
            get(handlers::get_session).delete(handlers::reset_session),
        )
        .with_state(state)
}
