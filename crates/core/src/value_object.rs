//! Value objects: equality by value, not identity.

use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Monetary amount in the catalog's single implicit currency.
///
/// Negative amounts are representable: an over-100% discount produces one.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// Price after taking `discount` off.
    pub fn discounted(self, discount: Percent) -> Self {
        Self(self.0 * discount.factor())
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Anything that rounds to zero cents prints as 0.00, never -0.00.
        let amount = if (self.0 * 100.0).round() == 0.0 { 0.0 } else { self.0 };
        write!(f, "{amount:.2}")
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number(s, "price").map(Price)
    }
}

/// Discount rate in percent. `[0, 100]` is expected but not enforced.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(f64);

impl ValueObject for Percent {}

impl Percent {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Multiplier applied to a price: `1 - value / 100`.
    pub fn factor(self) -> f64 {
        1.0 - self.0 / 100.0
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Percent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Percent {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number(s, "discount rate").map(Percent)
    }
}

fn parse_number(s: &str, what: &str) -> Result<f64, DomainError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| DomainError::invalid_input(format!("{what} must be a number, got {s:?}")))?;
    if !value.is_finite() {
        return Err(DomainError::invalid_input(format!("{what} must be finite")));
    }
    Ok(value)
}
