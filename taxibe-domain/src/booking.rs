use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use taxibe_shared::{Ariary, BookingId, SeatNumber, TripId};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Expired,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Expired => "EXPIRED",
        };
        f.write_str(s)
    }
}

/// The payload posted to the Booking API. `places_reserved` duplicates the
/// seat-list length on the wire, so the constructor derives it rather than
/// letting the two drift. The idempotency key is minted fresh per attempt
/// and lets the server drop an accidental duplicate of the same attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub trip_id: TripId,
    pub seats_reserved: Vec<SeatNumber>,
    pub places_reserved: u32,
    pub idempotency_key: Uuid,
}

impl BookingRequest {
    pub fn new(trip_id: TripId, seats_reserved: Vec<SeatNumber>) -> Self {
        let places_reserved = seats_reserved.len() as u32;
        Self {
            trip_id,
            seats_reserved,
            places_reserved,
            idempotency_key: Uuid::new_v4(),
        }
    }
}

/// What a successful submission hands back: the booking record id and the
/// seat list the server now considers reserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub booking_id: BookingId,
    pub seats_confirmed: Vec<SeatNumber>,
    pub status: BookingStatus,
}

/// A booking as returned by the my-bookings endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub trip_id: TripId,
    pub seats_reserved: Vec<SeatNumber>,
    pub total_price: Ariary,
    pub status: BookingStatus,
    /// Payment-intent reference once a card payment has been initiated.
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
