use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers;
use crate::BookingState;

pub fn booking_routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/", post(handlers::create_booking))
        .route("/confirm", put(handlers::confirm_booking))
        .route("/user/{user_id}", get(handlers::get_user_bookings))
        .route("/provider/{provider_id}", get(handlers::get_provider_bookings))
        .with_state(state)
}
