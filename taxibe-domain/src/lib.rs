pub mod booking;
pub mod layout;
pub mod payment;
pub mod selection;
pub mod session;
pub mod ticket;
pub mod trip;

pub use booking::{Booking, BookingRequest, BookingStatus, SubmissionReceipt};
pub use layout::{LayoutError, Slot, VanModel, VehicleLayout};
pub use selection::{SeatError, SeatSelection, SelectionConfig};
pub use session::{ReservationSession, SessionError, TripContext};
pub use trip::{TripDetails, TripSummary};
