use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: String,
    pub provider_id: String,
    pub appointment_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub estimated_cost: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// Body of POST /bookings.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    pub user_id: String,
    pub provider_id: String,
    pub appointment_time: DateTime<Utc>,
    pub estimated_cost: Option<f64>,
}

/// Body of PUT /bookings/confirm. A booking is addressed by the triple
/// the original client knows, not by server-side id.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmBookingRequest {
    pub user_id: String,
    pub provider_id: String,
    pub appointment_time: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Booking not found")]
    NotFound,

    #[error("Booking already confirmed")]
    AlreadyConfirmed,

    #[error("{0}")]
    InvalidAppointmentTime(String),
}
