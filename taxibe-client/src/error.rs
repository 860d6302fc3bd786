use serde::Deserialize;
use taxibe_shared::SeatNumber;
use thiserror::Error;

/// Failures surfaced by the remote collaborators. Each variant maps to a
/// different recovery: reselect seats, sign in again, retry later, or show
/// the server's own message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Another booking claimed seats between the layout fetch and the
    /// submission. Refetch trip details and let the user reselect.
    #[error("Seats {seats:?} were just taken by another booking")]
    SeatsAlreadyTaken { seats: Vec<SeatNumber> },

    #[error("Not signed in or session expired")]
    AuthenticationRequired,

    #[error("Network unavailable")]
    NetworkUnavailable,

    #[error("Server rejected the request (status {status}): {message}")]
    ServerRejected { status: u16, message: String },

    #[error("Could not parse server response: {0}")]
    ResponseParseFailed(String),
}

/// Body the Booking API returns with a 409, listing the contested seats.
#[derive(Debug, Deserialize)]
struct ConflictBody {
    #[serde(default)]
    seats: Vec<SeatNumber>,
}

/// Classify a non-2xx response once, at the boundary.
pub fn classify_status(status: u16, body: &str) -> ApiError {
    match status {
        401 | 403 => ApiError::AuthenticationRequired,
        409 => {
            let seats = serde_json::from_str::<ConflictBody>(body)
                .map(|b| b.seats)
                .unwrap_or_default();
            ApiError::SeatsAlreadyTaken { seats }
        }
        _ => ApiError::ServerRejected {
            status,
            message: body.to_string(),
        },
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::ResponseParseFailed(err.to_string())
        } else {
            // Timeouts, refused connections, DNS failures: all the user
            // can do is retry once the network is back.
            ApiError::NetworkUnavailable
        }
    }
}

/// Submission-workflow errors: the local pre-flight guards plus everything
/// the Booking API can report.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("No seats selected")]
    NothingSelected,

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses() {
        assert!(matches!(
            classify_status(401, ""),
            ApiError::AuthenticationRequired
        ));
        assert!(matches!(
            classify_status(403, "forbidden"),
            ApiError::AuthenticationRequired
        ));
    }

    #[test]
    fn test_conflict_parses_contested_seats() {
        let err = classify_status(409, r#"{"error":"seats taken","seats":[4,5]}"#);
        match err {
            ApiError::SeatsAlreadyTaken { seats } => assert_eq!(seats, vec![4, 5]),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_conflict_without_seat_list() {
        let err = classify_status(409, "conflict");
        match err {
            ApiError::SeatsAlreadyTaken { seats } => assert!(seats.is_empty()),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_other_statuses_surface_verbatim() {
        let err = classify_status(500, "boom");
        match err {
            ApiError::ServerRejected { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }
}
