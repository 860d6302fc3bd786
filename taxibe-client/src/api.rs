use crate::error::ApiError;
use async_trait::async_trait;
use taxibe_domain::booking::{Booking, BookingRequest, SubmissionReceipt};
use taxibe_domain::payment::PaymentStatus;
use taxibe_domain::trip::{Cooperative, TripDetails, TripQuery, TripSummary};
use taxibe_shared::{BookingId, TripId};

/// Read side of the remote backend: route search and trip details.
#[async_trait]
pub trait TripsApi: Send + Sync {
    async fn search_trips(&self, query: &TripQuery) -> Result<Vec<TripSummary>, ApiError>;

    async fn trip_details(&self, trip: TripId) -> Result<TripDetails, ApiError>;

    async fn list_cooperatives(&self) -> Result<Vec<Cooperative>, ApiError>;
}

/// Write side: booking submission, booking history, payment confirmation.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn submit_booking(&self, request: &BookingRequest)
        -> Result<SubmissionReceipt, ApiError>;

    async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError>;

    async fn confirm_payment(
        &self,
        booking: BookingId,
        payment_intent_id: &str,
    ) -> Result<PaymentStatus, ApiError>;
}

/// Where the bearer token comes from. The host app plugs in its secure
/// storage; tests plug in a fixed token. Keeps token access out of the
/// request handlers themselves.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// The current access token, or `None` when signed out.
    async fn access_token(&self) -> Result<Option<String>, ApiError>;
}

/// Fixed-token provider for tests and single-user hosts.
pub struct StaticCredentials {
    token: Option<String>,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.token.clone())
    }
}
