use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wraps passenger-identifying values (phone numbers, CIN) so they cannot
/// leak through Debug or Display formatting in log output. Serialization
/// keeps the real value: API payloads need it, log macros never see it.
#[derive(Clone, Deserialize)]
pub struct Masked<T>(pub T);

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }

    pub fn inner(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<masked>")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<masked>")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

/// Renders a phone number keeping only the last `visible` digits, for the
/// confirmation screens that echo part of the number back to the user.
pub fn masked_tail(value: &str, visible: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= visible {
        return "*".repeat(chars.len());
    }
    let hidden = chars.len() - visible;
    let mut out = "*".repeat(hidden);
    out.extend(&chars[hidden..]);
    out
}
