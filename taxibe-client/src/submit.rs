use crate::api::BookingApi;
use crate::error::SubmitError;
use std::sync::Arc;
use taxibe_domain::booking::{BookingRequest, SubmissionReceipt};
use taxibe_domain::session::ReservationSession;
use taxibe_shared::{SeatNumber, TripId};

/// Posts a finalized seat selection to the Booking API.
///
/// Never retries on its own: a resubmission after a network error could
/// double-book, so any retry is an explicit new attempt by the user with a
/// fresh idempotency key.
pub struct ReservationSubmitter {
    api: Arc<dyn BookingApi>,
}

impl ReservationSubmitter {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    /// Submit a seat list for a trip. Empty selections are refused locally
    /// before any request goes out.
    pub async fn submit(
        &self,
        trip_id: TripId,
        seats: &[SeatNumber],
    ) -> Result<SubmissionReceipt, SubmitError> {
        if seats.is_empty() {
            return Err(SubmitError::NothingSelected);
        }

        let request = BookingRequest::new(trip_id, seats.to_vec());
        tracing::info!(
            trip = %trip_id,
            places = request.places_reserved,
            key = %request.idempotency_key,
            "Submitting reservation"
        );

        match self.api.submit_booking(&request).await {
            Ok(receipt) => {
                tracing::info!(booking = %receipt.booking_id, "Reservation accepted");
                Ok(receipt)
            }
            Err(err) => {
                tracing::warn!(trip = %trip_id, error = %err, "Reservation failed");
                Err(err.into())
            }
        }
    }

    /// Drive a whole session through submission: arm the guard, post the
    /// selection, and on success fold the receipt back in (confirmed seats
    /// become reserved, selection empties). On failure the session is
    /// re-armed so the caller can refetch or let the user retry.
    pub async fn submit_session(
        &self,
        session: &mut ReservationSession,
    ) -> Result<SubmissionReceipt, SubmitError> {
        let seats = session
            .begin_submit()
            .map_err(|_| SubmitError::SubmissionInFlight)?;

        if seats.is_empty() {
            session.abort_submit();
            return Err(SubmitError::NothingSelected);
        }

        let trip_id = session.context().trip_id;
        match self.submit(trip_id, &seats).await {
            Ok(receipt) => {
                session.apply_receipt(&receipt);
                Ok(receipt)
            }
            Err(err) => {
                session.abort_submit();
                Err(err)
            }
        }
    }
}
