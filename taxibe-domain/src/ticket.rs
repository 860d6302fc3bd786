use taxibe_shared::{BookingId, SeatNumber, TripId};

/// Decoded contents of a ticket QR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQr {
    pub booking_id: BookingId,
    pub trip_id: TripId,
    pub seats: Vec<SeatNumber>,
}

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("Malformed ticket payload: {0}")]
    MalformedPayload(String),
}

/// Assemble the opaque string embedded in the ticket QR code.
///
/// Format: `Reservation:{id};Trajet:{trip};Seats:{s1,s2,...}`. Gate
/// scanners in the field already read this shape, so it cannot change.
pub fn qr_payload(booking_id: BookingId, trip_id: TripId, seats: &[SeatNumber]) -> String {
    let seat_list = seats
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "Reservation:{};Trajet:{};Seats:{}",
        booking_id, trip_id, seat_list
    )
}

/// Parse a scanned payload back into its parts.
pub fn parse_qr_payload(payload: &str) -> Result<TicketQr, TicketError> {
    let mut booking_id = None;
    let mut trip_id = None;
    let mut seats = None;

    for part in payload.split(';') {
        let (key, value) = part
            .split_once(':')
            .ok_or_else(|| TicketError::MalformedPayload(format!("missing ':' in '{}'", part)))?;
        match key {
            "Reservation" => {
                let id = value
                    .parse::<i64>()
                    .map_err(|_| TicketError::MalformedPayload(format!("bad booking id '{}'", value)))?;
                booking_id = Some(BookingId(id));
            }
            "Trajet" => {
                let id = value
                    .parse::<i64>()
                    .map_err(|_| TicketError::MalformedPayload(format!("bad trip id '{}'", value)))?;
                trip_id = Some(TripId(id));
            }
            "Seats" => {
                let parsed = value
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .map(|s| {
                        s.parse::<SeatNumber>().map_err(|_| {
                            TicketError::MalformedPayload(format!("bad seat number '{}'", s))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                seats = Some(parsed);
            }
            other => {
                return Err(TicketError::MalformedPayload(format!(
                    "unknown field '{}'",
                    other
                )))
            }
        }
    }

    match (booking_id, trip_id, seats) {
        (Some(booking_id), Some(trip_id), Some(seats)) => Ok(TicketQr {
            booking_id,
            trip_id,
            seats,
        }),
        _ => Err(TicketError::MalformedPayload(
            "missing Reservation, Trajet or Seats field".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_format() {
        let payload = qr_payload(BookingId(123), TripId(45), &[4, 5, 6]);
        assert_eq!(payload, "Reservation:123;Trajet:45;Seats:4,5,6");
    }

    #[test]
    fn test_scan_round_trip() {
        let payload = qr_payload(BookingId(123), TripId(45), &[4, 5, 6]);
        let ticket = parse_qr_payload(&payload).unwrap();
        assert_eq!(
            ticket,
            TicketQr {
                booking_id: BookingId(123),
                trip_id: TripId(45),
                seats: vec![4, 5, 6],
            }
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_qr_payload("not a ticket").is_err());
        assert!(parse_qr_payload("Reservation:abc;Trajet:1;Seats:2").is_err());
        assert!(parse_qr_payload("Reservation:1;Trajet:2").is_err());
    }
}
