use serde::{Deserialize, Serialize};
use std::fmt;
use taxibe_shared::{Ariary, Masked};

/// The payment channels offered at checkout: the three mobile-money
/// operators plus card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Mvola,
    OrangeMoney,
    AirtelMoney,
    Card,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Mvola => "MVola",
            PaymentMethod::OrangeMoney => "Orange Money",
            PaymentMethod::AirtelMoney => "Airtel Money",
            PaymentMethod::Card => "Carte de crédit",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    RequiresAction,
    Succeeded,
    Failed,
}

/// What the checkout form collects before initiating payment. The CIN and
/// phone number go out on the wire but stay masked in any log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutDetails {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub cin: Masked<String>,
    pub phone: Masked<String>,
    pub age: u8,
    pub method: PaymentMethod,
}

/// Bookings are held against a partial up-front payment; the remainder is
/// settled at boarding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DepositPolicy {
    pub rate_percent: u8,
}

impl Default for DepositPolicy {
    fn default() -> Self {
        Self { rate_percent: 30 }
    }
}

impl DepositPolicy {
    /// Minimum amount to pay now, floored to a whole ariary.
    pub fn minimum_deposit(&self, total: Ariary) -> Ariary {
        total.percent(self.rate_percent)
    }
}
