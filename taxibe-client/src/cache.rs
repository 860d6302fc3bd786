use crate::api::BookingApi;
use crate::error::ApiError;
use std::sync::Mutex;
use taxibe_domain::booking::Booking;

/// Local copy of the bookings list so the tickets screen still renders
/// when the connection drops.
pub trait ReservationCache: Send + Sync {
    fn load(&self) -> Option<Vec<Booking>>;
    fn store(&self, bookings: &[Booking]);
}

/// Process-lifetime cache. Hosts with durable storage implement
/// `ReservationCache` over it instead.
#[derive(Default)]
pub struct MemoryCache {
    inner: Mutex<Option<Vec<Booking>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationCache for MemoryCache {
    fn load(&self) -> Option<Vec<Booking>> {
        self.inner.lock().ok()?.clone()
    }

    fn store(&self, bookings: &[Booking]) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = Some(bookings.to_vec());
        }
    }
}

/// A bookings list plus where it came from, so the screen can badge stale
/// data.
#[derive(Debug, Clone)]
pub struct BookingsView {
    pub bookings: Vec<Booking>,
    pub from_cache: bool,
}

/// Network-first fetch with cache fallback. Only a dead network falls back
/// to the cache; an expired token or a server rejection propagates, since
/// showing stale data would mask an error the user must act on.
pub async fn fetch_bookings_cached(
    api: &dyn BookingApi,
    cache: &dyn ReservationCache,
) -> Result<BookingsView, ApiError> {
    match api.my_bookings().await {
        Ok(bookings) => {
            cache.store(&bookings);
            Ok(BookingsView {
                bookings,
                from_cache: false,
            })
        }
        Err(ApiError::NetworkUnavailable) => match cache.load() {
            Some(bookings) => {
                tracing::warn!("Network unavailable, serving cached bookings");
                Ok(BookingsView {
                    bookings,
                    from_cache: true,
                })
            }
            None => Err(ApiError::NetworkUnavailable),
        },
        Err(err) => Err(err),
    }
}
