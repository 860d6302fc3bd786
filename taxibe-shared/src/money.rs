use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// An amount of Malagasy ariary. Fares are whole ariary, no subunit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Ariary(pub i64);

impl Ariary {
    pub const ZERO: Ariary = Ariary(0);

    /// Multiply a per-unit price by a quantity, saturating on overflow.
    pub fn times(self, quantity: u32) -> Ariary {
        Ariary(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Integer percentage of this amount, rounded down.
    pub fn percent(self, rate: u8) -> Ariary {
        Ariary(self.0 * i64::from(rate) / 100)
    }
}

impl Add for Ariary {
    type Output = Ariary;

    fn add(self, rhs: Ariary) -> Ariary {
        Ariary(self.0 + rhs.0)
    }
}

impl fmt::Display for Ariary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Ar", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_and_display() {
        let fare = Ariary(10000);
        assert_eq!(fare.times(3), Ariary(30000));
        assert_eq!(fare.times(3).to_string(), "30000 Ar");
    }

    #[test]
    fn test_percent_rounds_down() {
        // 30% of 25000 is 7500; 30% of 9999 floors to 2999
        assert_eq!(Ariary(25000).percent(30), Ariary(7500));
        assert_eq!(Ariary(9999).percent(30), Ariary(2999));
    }
}
