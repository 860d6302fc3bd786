use std::collections::BTreeSet;
use taxibe_shared::{Ariary, SeatNumber, DRIVER_SEAT};

/// Per-booking limits. Different flows have shipped with different caps
/// (4 for the standard screen, 15 for group charters), so the limit is
/// supplied at construction instead of being baked in.
#[derive(Debug, Clone, Copy)]
pub struct SelectionConfig {
    pub max_seats_per_booking: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_seats_per_booking: 4,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("Seat {seat} is not available")]
    SeatUnavailable { seat: SeatNumber },

    #[error("Maximum {limit} seats per booking")]
    SelectionLimitExceeded { limit: usize },
}

/// Tracks which seats the server says are taken and which ones the user
/// has picked in this session. The server set is authoritative; the
/// selection never intersects it and never contains the driver seat.
#[derive(Debug, Clone)]
pub struct SeatSelection {
    config: SelectionConfig,
    reserved: BTreeSet<SeatNumber>,
    selected: BTreeSet<SeatNumber>,
}

impl SeatSelection {
    pub fn new(config: SelectionConfig, reserved: impl IntoIterator<Item = SeatNumber>) -> Self {
        Self {
            config,
            reserved: reserved.into_iter().filter(|&s| s != DRIVER_SEAT).collect(),
            selected: BTreeSet::new(),
        }
    }

    /// Select or deselect a seat. Removal always succeeds; adding checks
    /// availability and the per-booking cap.
    pub fn toggle_seat(&mut self, seat: SeatNumber) -> Result<(), SeatError> {
        if seat == DRIVER_SEAT || self.reserved.contains(&seat) {
            return Err(SeatError::SeatUnavailable { seat });
        }

        if self.selected.remove(&seat) {
            return Ok(());
        }

        if self.selected.len() >= self.config.max_seats_per_booking {
            return Err(SeatError::SelectionLimitExceeded {
                limit: self.config.max_seats_per_booking,
            });
        }

        self.selected.insert(seat);
        Ok(())
    }

    /// The current picks, ascending.
    pub fn current_selection(&self) -> Vec<SeatNumber> {
        self.selected.iter().copied().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, seat: SeatNumber) -> bool {
        self.selected.contains(&seat)
    }

    pub fn is_reserved(&self, seat: SeatNumber) -> bool {
        self.reserved.contains(&seat)
    }

    pub fn reserved_seats(&self) -> Vec<SeatNumber> {
        self.reserved.iter().copied().collect()
    }

    pub fn total_price(&self, per_seat: Ariary) -> Ariary {
        per_seat.times(self.selected.len() as u32)
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Fold freshly confirmed seats into the reserved set. Seats the user
    /// still had selected drop out of the selection so the two sets stay
    /// disjoint. Used after a successful submission and after refetching
    /// trip details on a seat conflict.
    pub fn mark_reserved(&mut self, seats: impl IntoIterator<Item = SeatNumber>) {
        for seat in seats {
            if seat == DRIVER_SEAT {
                continue;
            }
            self.reserved.insert(seat);
            self.selected.remove(&seat);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_with(reserved: &[SeatNumber]) -> SeatSelection {
        SeatSelection::new(SelectionConfig::default(), reserved.iter().copied())
    }

    #[test]
    fn test_toggle_twice_returns_to_empty() {
        let mut sel = selection_with(&[]);

        sel.toggle_seat(5).unwrap();
        assert_eq!(sel.current_selection(), vec![5]);

        sel.toggle_seat(5).unwrap();
        assert!(sel.current_selection().is_empty());
    }

    #[test]
    fn test_driver_seat_always_refused() {
        let mut sel = selection_with(&[]);
        assert_eq!(
            sel.toggle_seat(DRIVER_SEAT),
            Err(SeatError::SeatUnavailable { seat: 1 })
        );
    }

    #[test]
    fn test_reserved_seat_refused() {
        let mut sel = selection_with(&[2, 5, 8]);
        assert_eq!(
            sel.toggle_seat(5),
            Err(SeatError::SeatUnavailable { seat: 5 })
        );
        assert!(sel.current_selection().is_empty());
    }

    #[test]
    fn test_limit_enforced_without_mutation() {
        let mut sel = selection_with(&[]);
        for seat in [4, 5, 6, 7] {
            sel.toggle_seat(seat).unwrap();
        }

        assert_eq!(
            sel.toggle_seat(9),
            Err(SeatError::SelectionLimitExceeded { limit: 4 })
        );
        assert_eq!(sel.current_selection(), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_deselect_allowed_at_limit() {
        let mut sel = selection_with(&[]);
        for seat in [4, 5, 6, 7] {
            sel.toggle_seat(seat).unwrap();
        }

        // Removal needs no limit headroom
        sel.toggle_seat(6).unwrap();
        assert_eq!(sel.current_selection(), vec![4, 5, 7]);
    }

    #[test]
    fn test_charter_limit_of_fifteen() {
        let config = SelectionConfig {
            max_seats_per_booking: 15,
        };
        let mut sel = SeatSelection::new(config, []);
        for seat in 2..=16 {
            sel.toggle_seat(seat).unwrap();
        }
        assert_eq!(sel.selected_count(), 15);
        assert!(sel.toggle_seat(17).is_err());
    }

    #[test]
    fn test_selection_is_ascending() {
        let mut sel = selection_with(&[]);
        for seat in [9, 3, 7] {
            sel.toggle_seat(seat).unwrap();
        }
        assert_eq!(sel.current_selection(), vec![3, 7, 9]);
    }

    #[test]
    fn test_total_price() {
        let mut sel = selection_with(&[]);
        for seat in [2, 3, 4] {
            sel.toggle_seat(seat).unwrap();
        }
        assert_eq!(sel.total_price(Ariary(10000)), Ariary(30000));
    }

    #[test]
    fn test_mark_reserved_keeps_sets_disjoint() {
        let mut sel = selection_with(&[3, 7]);
        sel.toggle_seat(4).unwrap();
        sel.toggle_seat(5).unwrap();

        sel.mark_reserved([4, 5]);

        assert_eq!(sel.reserved_seats(), vec![3, 4, 5, 7]);
        assert!(sel.current_selection().is_empty());
        assert_eq!(
            sel.toggle_seat(4),
            Err(SeatError::SeatUnavailable { seat: 4 })
        );
    }
}
