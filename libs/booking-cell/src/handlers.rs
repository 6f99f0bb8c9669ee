use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::AppError;

use crate::models::{BookingError, ConfirmBookingRequest, CreateBookingRequest};
use crate::BookingState;

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound => AppError::NotFound(err.to_string()),
            BookingError::AlreadyConfirmed => AppError::Conflict(err.to_string()),
            BookingError::InvalidAppointmentTime(msg) => AppError::ValidationError(msg),
        }
    }
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = state.bookings.create(request)?;
    Ok(Json(json!(booking)))
}

#[axum::debug_handler]
pub async fn confirm_booking(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<ConfirmBookingRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = state.bookings.confirm(
        &request.user_id,
        &request.provider_id,
        request.appointment_time,
    )?;

    Ok(Json(json!({
        "message": "Booking confirmed successfully",
        "booking": booking
    })))
}

#[axum::debug_handler]
pub async fn get_user_bookings(
    State(state): State<Arc<BookingState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let bookings = state.bookings.for_user(&user_id);
    Ok(Json(json!({
        "bookings": bookings,
        "total": bookings.len()
    })))
}

#[axum::debug_handler]
pub async fn get_provider_bookings(
    State(state): State<Arc<BookingState>>,
    Path(provider_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let bookings = state.bookings.for_provider(&provider_id);
    Ok(Json(json!({
        "bookings": bookings,
        "total": bookings.len()
    })))
}
