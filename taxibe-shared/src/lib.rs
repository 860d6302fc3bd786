pub mod ids;
pub mod money;
pub mod pii;

pub use ids::{BookingId, SeatNumber, TripId, DRIVER_SEAT};
pub use money::Ariary;
pub use pii::Masked;
