use crate::api::{BookingApi, CredentialProvider, TripsApi};
use crate::error::{classify_status, ApiError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use taxibe_domain::booking::{Booking, BookingRequest, SubmissionReceipt};
use taxibe_domain::payment::PaymentStatus;
use taxibe_domain::trip::{Cooperative, TripDetails, TripQuery, TripSummary};
use taxibe_shared::{BookingId, TripId};

/// HTTP client for the TaxiBe backend.
///
/// Every request carries the bearer token from the credential provider and
/// a bounded timeout; responses are classified into `ApiError` here and
/// nowhere else.
#[derive(Clone)]
pub struct TaxibeApi {
    http: Client,
    base_url: String,
    timeout: Duration,
    credentials: Arc<dyn CredentialProvider>,
}

impl TaxibeApi {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            credentials,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach timeout and, when signed in, the bearer token.
    async fn prepare(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let builder = builder.timeout(self.timeout);
        match self.credentials.access_token().await? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    /// Like `prepare`, but refuses to send unauthenticated.
    async fn prepare_authed(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self
            .credentials
            .access_token()
            .await?
            .ok_or(ApiError::AuthenticationRequired)?;
        Ok(builder.timeout(self.timeout).bearer_auth(token))
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::ResponseParseFailed(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(classify_status(status.as_u16(), &body))
        }
    }
}

#[async_trait]
impl TripsApi for TaxibeApi {
    async fn search_trips(&self, query: &TripQuery) -> Result<Vec<TripSummary>, ApiError> {
        let date = query.date.to_string();
        let request = self.http.get(self.url("/api/taxibe/")).query(&[
            ("from", query.route.from_city.as_str()),
            ("to", query.route.to_city.as_str()),
            ("date", date.as_str()),
        ]);
        let response = self.prepare(request).await?.send().await?;
        Self::read_json(response).await
    }

    async fn trip_details(&self, trip: TripId) -> Result<TripDetails, ApiError> {
        let request = self.http.get(self.url(&format!("/api/taxibe/{}/", trip)));
        let response = self.prepare(request).await?.send().await?;
        Self::read_json(response).await
    }

    async fn list_cooperatives(&self) -> Result<Vec<Cooperative>, ApiError> {
        let request = self.http.get(self.url("/api/cooperative/"));
        let response = self.prepare(request).await?.send().await?;
        Self::read_json(response).await
    }
}

#[derive(Debug, Serialize)]
struct ConfirmPaymentBody<'a> {
    booking_id: BookingId,
    payment_intent_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ConfirmPaymentResponse {
    status: PaymentStatus,
}

#[async_trait]
impl BookingApi for TaxibeApi {
    async fn submit_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<SubmissionReceipt, ApiError> {
        tracing::debug!(trip = %request.trip_id, places = request.places_reserved, "POST /api/book/");
        let builder = self.http.post(self.url("/api/book/")).json(request);
        let response = self.prepare_authed(builder).await?.send().await?;
        Self::read_json(response).await
    }

    async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let builder = self.http.get(self.url("/api/my-book/"));
        let response = self.prepare_authed(builder).await?.send().await?;
        Self::read_json(response).await
    }

    async fn confirm_payment(
        &self,
        booking: BookingId,
        payment_intent_id: &str,
    ) -> Result<PaymentStatus, ApiError> {
        let body = ConfirmPaymentBody {
            booking_id: booking,
            payment_intent_id,
        };
        let builder = self.http.post(self.url("/api/payments/confirm/")).json(&body);
        let response = self.prepare_authed(builder).await?.send().await?;
        let parsed: ConfirmPaymentResponse = Self::read_json(response).await?;
        Ok(parsed.status)
    }
}
