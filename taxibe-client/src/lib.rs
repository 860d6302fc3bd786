pub mod api;
pub mod app_config;
pub mod cache;
pub mod error;
pub mod http;
pub mod submit;

pub use api::{BookingApi, CredentialProvider, StaticCredentials, TripsApi};
pub use app_config::Config;
pub use cache::{fetch_bookings_cached, MemoryCache, ReservationCache};
pub use error::{ApiError, SubmitError};
pub use http::TaxibeApi;
pub use submit::ReservationSubmitter;
