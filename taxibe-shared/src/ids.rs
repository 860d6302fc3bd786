use serde::{Deserialize, Serialize};
use std::fmt;

/// A passenger seat position within a vehicle. Seat 1 is the driver.
pub type SeatNumber = u32;

/// Seat number 1 is always the driver and is never selectable or bookable.
pub const DRIVER_SEAT: SeatNumber = 1;

/// Identifier of a trip (a vehicle departing on a route at a date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub i64);

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a booking record created by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub i64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
