use crate::booking::SubmissionReceipt;
use crate::layout::{generate_layout, LayoutError, VanModel, VehicleLayout};
use crate::selection::{SeatError, SeatSelection, SelectionConfig};
use crate::trip::TripDetails;
use taxibe_shared::{Ariary, SeatNumber, TripId};

/// The slice of trip data the seat-selection screen works against.
#[derive(Debug, Clone)]
pub struct TripContext {
    pub trip_id: TripId,
    pub total_seats: u32,
    pub price_per_seat: Ariary,
    pub van_model: Option<VanModel>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Seat(#[from] SeatError),

    #[error("A submission is already in flight")]
    SubmissionInFlight,
}

/// One seat-selection screen's worth of state: the generated chart, the
/// selection, and a guard serializing submission against further edits.
///
/// There is exactly one owner per screen; the host drives all calls
/// sequentially. The guard only keeps a slow in-flight request from racing
/// local edits, it is not a lock.
#[derive(Debug)]
pub struct ReservationSession {
    context: TripContext,
    layout: VehicleLayout,
    selection: SeatSelection,
    submitting: bool,
}

impl ReservationSession {
    pub fn new(
        context: TripContext,
        reserved: impl IntoIterator<Item = SeatNumber>,
        config: SelectionConfig,
    ) -> Result<Self, LayoutError> {
        let layout = generate_layout(context.total_seats, context.van_model)?;
        Ok(Self {
            context,
            layout,
            selection: SeatSelection::new(config, reserved),
            submitting: false,
        })
    }

    /// Seed a session straight from a trip-details fetch.
    pub fn from_details(
        trip_id: TripId,
        details: &TripDetails,
        config: SelectionConfig,
    ) -> Result<Self, LayoutError> {
        let context = TripContext {
            trip_id,
            total_seats: details.total_seats,
            price_per_seat: details.price_per_seat,
            van_model: details.van_model,
        };
        Self::new(context, details.reserved_seats.iter().copied(), config)
    }

    pub fn context(&self) -> &TripContext {
        &self.context
    }

    pub fn layout(&self) -> &VehicleLayout {
        &self.layout
    }

    pub fn selection(&self) -> &SeatSelection {
        &self.selection
    }

    pub fn toggle_seat(&mut self, seat: SeatNumber) -> Result<(), SessionError> {
        if self.submitting {
            return Err(SessionError::SubmissionInFlight);
        }
        self.selection.toggle_seat(seat)?;
        Ok(())
    }

    pub fn selected_seats(&self) -> Vec<SeatNumber> {
        self.selection.current_selection()
    }

    pub fn total_price(&self) -> Ariary {
        self.selection.total_price(self.context.price_per_seat)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear_selection();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Arm the submission guard and snapshot the seats to send. Fails if a
    /// submission is already pending so a double tap cannot post twice.
    pub fn begin_submit(&mut self) -> Result<Vec<SeatNumber>, SessionError> {
        if self.submitting {
            return Err(SessionError::SubmissionInFlight);
        }
        self.submitting = true;
        Ok(self.selection.current_selection())
    }

    /// Re-arm the session after a failed attempt so the user can retry or
    /// reselect.
    pub fn abort_submit(&mut self) {
        self.submitting = false;
    }

    /// Fold a successful receipt back in: the confirmed seats become
    /// reserved, the selection empties, and the guard drops.
    pub fn apply_receipt(&mut self, receipt: &SubmissionReceipt) {
        self.selection
            .mark_reserved(receipt.seats_confirmed.iter().copied());
        self.selection.clear_selection();
        self.submitting = false;
    }

    /// Refresh the server-reserved set after a seat conflict refetch.
    pub fn refresh_reserved(&mut self, reserved: impl IntoIterator<Item = SeatNumber>) {
        self.selection.mark_reserved(reserved);
    }
}
