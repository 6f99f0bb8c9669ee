use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::router::booking_routes;
use booking_cell::services::booking::BookingService;
use booking_cell::BookingState;
use estimate_cell::router::estimate_routes;
use estimate_cell::EstimateState;
use intake_cell::router::intake_routes;
use intake_cell::services::session::SessionStore;
use intake_cell::IntakeState;
use provider_cell::router::provider_routes;
use provider_cell::ProviderState;
use shared_config::AppConfig;
use shared_datastore::ReferenceStore;

pub fn create_router(reference: Arc<ReferenceStore>, config: &AppConfig) -> Router {
    let provider_state = Arc::new(ProviderState {
        reference: reference.clone(),
        match_limit: config.match_limit,
    });
    let estimate_state = Arc::new(EstimateState {
        reference: reference.clone(),
    });
    let intake_state = Arc::new(IntakeState {
        reference: reference.clone(),
        sessions: SessionStore::new(),
    });
    let booking_state = Arc::new(BookingState {
        bookings: Arc::new(BookingService::new()),
    });

    Router::new()
        .route("/", get(|| async { "carefind API is running!" }))
        .nest("/providers", provider_routes(provider_state))
        .nest("/estimates", estimate_routes(estimate_state))
        .nest("/intake", intake_routes(intake_state))
        .nest("/bookings", booking_routes(booking_state))
}
