use serde::{Deserialize, Serialize};
use taxibe_shared::{SeatNumber, DRIVER_SEAT};

/// One position in the seating grid: a numbered seat or an aisle filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Seat(SeatNumber),
    Empty,
}

/// Van models with a surveyed cabin arrangement. Anything else goes
/// through the generic row generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VanModel {
    /// 20-seat Mercedes Sprinter conversion.
    Sprinter20,
    /// 22-seat VW Crafter conversion.
    Crafter22,
}

impl VanModel {
    pub fn seat_count(self) -> u32 {
        match self {
            VanModel::Sprinter20 => 20,
            VanModel::Crafter22 => 22,
        }
    }
}

/// The 2D seating chart of a vehicle: rows of slots, driver first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleLayout {
    rows: Vec<Vec<Slot>>,
}

impl VehicleLayout {
    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    /// All passenger seat numbers in grid order, driver excluded.
    pub fn passenger_seats(&self) -> Vec<SeatNumber> {
        self.rows
            .iter()
            .flatten()
            .filter_map(|slot| match slot {
                Slot::Seat(n) if *n != DRIVER_SEAT => Some(*n),
                _ => None,
            })
            .collect()
    }

    /// Total seats including the driver.
    pub fn seat_count(&self) -> u32 {
        self.rows
            .iter()
            .flatten()
            .filter(|slot| matches!(slot, Slot::Seat(_)))
            .count() as u32
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Cannot build a seating chart for {total_seats} seats: minimum vehicle size is 3")]
    InvalidConfiguration { total_seats: u32 },
}

/// Builds the seating chart for a vehicle.
///
/// A known van model whose surveyed capacity matches `total_seats` gets its
/// fixed arrangement. Everything else is generated: a front row of driver
/// plus two passengers, then benches of four, then one shorter back bench
/// for whatever is left.
pub fn generate_layout(
    total_seats: u32,
    model: Option<VanModel>,
) -> Result<VehicleLayout, LayoutError> {
    if let Some(model) = model {
        if model.seat_count() == total_seats {
            return Ok(fixed_layout(model));
        }
        // Capacity disagrees with the surveyed model, trust the seat count.
    }

    if total_seats < 3 {
        return Err(LayoutError::InvalidConfiguration { total_seats });
    }

    let mut rows = vec![vec![Slot::Seat(1), Slot::Seat(2), Slot::Seat(3)]];

    let remaining = total_seats - 3;
    let full_rows = remaining / 4;
    for i in 0..full_rows {
        let first = 4 + i * 4;
        rows.push((first..first + 4).map(Slot::Seat).collect());
    }

    let leftover = remaining % 4;
    if leftover > 0 {
        let first = total_seats - leftover + 1;
        rows.push((first..=total_seats).map(Slot::Seat).collect());
    }

    Ok(VehicleLayout { rows })
}

fn fixed_layout(model: VanModel) -> VehicleLayout {
    use Slot::{Empty, Seat};

    let rows = match model {
        VanModel::Sprinter20 => vec![
            vec![Seat(1), Empty, Seat(2), Seat(3)],
            vec![Seat(4), Seat(5), Seat(6), Seat(7)],
            vec![Seat(8), Seat(9), Empty, Seat(10)],
            vec![Seat(11), Seat(12), Empty, Seat(13)],
            vec![Seat(14), Seat(15), Empty, Seat(16)],
            vec![Seat(17), Seat(18), Seat(19), Seat(20)],
        ],
        VanModel::Crafter22 => vec![
            vec![Seat(1), Empty, Seat(2), Seat(3)],
            vec![Seat(4), Seat(5), Seat(6), Seat(7)],
            vec![Seat(8), Seat(9), Seat(10), Empty],
            vec![Seat(11), Seat(12), Seat(13), Seat(14)],
            vec![Seat(15), Seat(16), Seat(17), Seat(18)],
            vec![Seat(19), Seat(20), Seat(21), Seat(22)],
        ],
    };

    VehicleLayout { rows }
}
