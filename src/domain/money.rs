use crate::error::RefundError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounds a monetary value to cents.
///
/// Midpoints round away from zero (16.665 becomes 16.67), and the result is
/// rescaled to exactly two fractional digits so serialized amounts always
/// read as currency.
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    cents
}

/// A non-negative monetary amount supplied by a caller.
///
/// Wraps `rust_decimal::Decimal` so boundary validation has a single place
/// to reject negative money before it reaches the policy engine.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, RefundError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(RefundError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = RefundError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_to_cents_midpoint_away_from_zero() {
        assert_eq!(round_to_cents(dec!(16.665)), dec!(16.67));
        assert_eq!(round_to_cents(dec!(16.664)), dec!(16.66));
        assert_eq!(round_to_cents(dec!(0.005)), dec!(0.01));
    }

    #[test]
    fn test_round_to_cents_canonical_scale() {
        assert_eq!(round_to_cents(dec!(100)).to_string(), "100.00");
        assert_eq!(round_to_cents(dec!(1.5)).to_string(), "1.50");
        assert_eq!(round_to_cents(dec!(0)).to_string(), "0.00");
    }

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(Amount::new(dec!(0.0)).is_ok());
        assert!(matches!(
            Amount::new(dec!(-1.0)),
            Err(RefundError::ValidationError(_))
        ));
    }
}
