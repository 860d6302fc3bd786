use crate::layout::VanModel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taxibe_shared::{Ariary, SeatNumber, TripId};

/// Route endpoints as the search screen captures them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub from_city: String,
    pub to_city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripQuery {
    pub route: Route,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooperative {
    pub id: i64,
    pub name: String,
}

/// The vehicle as listed: brand, plate, driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub brand: String,
    pub plate_number: String,
    pub driver_name: String,
    pub model: Option<VanModel>,
}

/// One row of the available-vehicles list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSummary {
    pub id: TripId,
    pub route: Route,
    pub date: NaiveDate,
    pub vehicle: Vehicle,
    pub cooperative: Cooperative,
    pub total_seats: u32,
    pub available_seats: u32,
    pub price_per_seat: Ariary,
}

/// What the seat-selection screen needs from the trip-details endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDetails {
    pub total_seats: u32,
    pub reserved_seats: Vec<SeatNumber>,
    pub price_per_seat: Ariary,
    pub van_model: Option<VanModel>,
}

/// Narrow a trip list to one cooperative; `None` keeps everything.
pub fn filter_by_cooperative(trips: Vec<TripSummary>, cooperative: Option<i64>) -> Vec<TripSummary> {
    match cooperative {
        None => trips,
        Some(id) => trips.into_iter().filter(|t| t.cooperative.id == id).collect(),
    }
}

/// Distinct cooperatives across a trip list, first-seen order, for the
/// filter picker.
pub fn distinct_cooperatives(trips: &[TripSummary]) -> Vec<Cooperative> {
    let mut seen = Vec::new();
    for trip in trips {
        if !seen.iter().any(|c: &Cooperative| c.id == trip.cooperative.id) {
            seen.push(trip.cooperative.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: i64, coop_id: i64, coop_name: &str) -> TripSummary {
        TripSummary {
            id: TripId(id),
            route: Route {
                from_city: "Antsirabe".to_string(),
                to_city: "Antananarivo".to_string(),
            },
            date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            vehicle: Vehicle {
                brand: "Toyota HiAce".to_string(),
                plate_number: format!("TAX {}", 1000 + id),
                driver_name: "Jean Rakoto".to_string(),
                model: None,
            },
            cooperative: Cooperative {
                id: coop_id,
                name: coop_name.to_string(),
            },
            total_seats: 15,
            available_seats: 5,
            price_per_seat: Ariary(10000),
        }
    }

    #[test]
    fn test_filter_keeps_all_without_cooperative() {
        let trips = vec![trip(1, 1, "Nord"), trip(2, 2, "Sud")];
        assert_eq!(filter_by_cooperative(trips, None).len(), 2);
    }

    #[test]
    fn test_filter_by_cooperative() {
        let trips = vec![trip(1, 1, "Nord"), trip(2, 2, "Sud"), trip(3, 1, "Nord")];
        let filtered = filter_by_cooperative(trips, Some(1));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|t| t.cooperative.id == 1));
    }

    #[test]
    fn test_distinct_cooperatives_first_seen_order() {
        let trips = vec![trip(1, 2, "Sud"), trip(2, 1, "Nord"), trip(3, 2, "Sud")];
        let coops = distinct_cooperatives(&trips);
        assert_eq!(coops.len(), 2);
        assert_eq!(coops[0].name, "Sud");
        assert_eq!(coops[1].name, "Nord");
    }
}
