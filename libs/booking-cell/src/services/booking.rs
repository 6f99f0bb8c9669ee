use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::models::{Booking, BookingError, BookingStatus, CreateBookingRequest};

/// How far ahead an appointment may be scheduled.
const MAX_ADVANCE_DAYS: i64 = 183;

/// In-memory booking ledger standing in for the external persistence
/// collaborator.
#[derive(Default)]
pub struct BookingService {
    bookings: RwLock<Vec<Booking>>,
}

impl BookingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, request: CreateBookingRequest) -> Result<Booking, BookingError> {
        let now = Utc::now();
        validate_appointment_time(request.appointment_time, now)?;

        let booking = Booking {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            provider_id: request.provider_id,
            appointment_time: request.appointment_time,
            status: BookingStatus::Pending,
            estimated_cost: request.estimated_cost,
            created_at: now,
            confirmed_at: None,
        };

        info!(
            "Booking {} created for user {} with provider {}",
            booking.id, booking.user_id, booking.provider_id
        );

        self.bookings.write().unwrap().push(booking.clone());
        Ok(booking)
    }

    /// Confirm a pending booking addressed by (user, provider, time).
    pub fn confirm(
        &self,
        user_id: &str,
        provider_id: &str,
        appointment_time: DateTime<Utc>,
    ) -> Result<Booking, BookingError> {
        let mut bookings = self.bookings.write().unwrap();
        let booking = bookings
            .iter_mut()
            .find(|b| {
                b.user_id == user_id
                    && b.provider_id == provider_id
                    && b.appointment_time == appointment_time
            })
            .ok_or(BookingError::NotFound)?;

        if booking.status == BookingStatus::Confirmed {
            return Err(BookingError::AlreadyConfirmed);
        }

        booking.status = BookingStatus::Confirmed;
        booking.confirmed_at = Some(Utc::now());
        info!("Booking {} confirmed", booking.id);
        Ok(booking.clone())
    }

    pub fn for_user(&self, user_id: &str) -> Vec<Booking> {
        self.bookings
            .read()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn for_provider(&self, provider_id: &str) -> Vec<Booking> {
        self.bookings
            .read()
            .unwrap()
            .iter()
            .filter(|b| b.provider_id == provider_id)
            .cloned()
            .collect()
    }
}

fn validate_appointment_time(
    appointment_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), BookingError> {
    if appointment_time <= now {
        return Err(BookingError::InvalidAppointmentTime(
            "Appointment date cannot be in the past".to_string(),
        ));
    }
    if appointment_time > now + Duration::days(MAX_ADVANCE_DAYS) {
        return Err(BookingError::InvalidAppointmentTime(
            "Appointment date cannot be more than 6 months in the future".to_string(),
        ));
    }
    Ok(())
}
