//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices are stored as integer minor units (cents). `Price` is the
//! decimal view used wherever money is derived rather than stored.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in the store's currency standard unit (e.g. dollars, not cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    amount: Decimal,
}

impl Price {
    /// Create a new price from a decimal amount, rounded to two places.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    /// Create a price from integer minor units.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
        }
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.amount)
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.amount + rhs.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(2590).display(), "$25.90");
    }

    #[test]
    fn test_new_rounds_to_cents() {
        let price = Price::new(Decimal::new(51_799, 3));
        assert_eq!(price.amount(), Decimal::new(5180, 2));
    }

    #[test]
    fn test_new_rounds_half_cents_up() {
        let per_wear = Price::new(Decimal::new(2625, 2) / Decimal::from(50));
        assert_eq!(per_wear.amount(), Decimal::new(53, 2));
        assert_eq!(per_wear.display(), "$0.53");
    }

    #[test]
    fn test_add() {
        let total = Price::from_cents(2590) + Price::from_cents(2250);
        assert_eq!(total.display(), "$48.40");
    }
}
