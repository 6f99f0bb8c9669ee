use std::sync::Arc;

use crate::services::booking::BookingService;

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

/// Shared state for the booking cell's routes.
pub struct BookingState {
    pub bookings: Arc<BookingService>,
}
