use crate::domain::money::Amount;
use crate::error::{RefundError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One cancellation request row as submitted by the booking workflow.
///
/// `credits_applied + bonus_applied + charge_amount` must equal
/// `total_amount`; that is the caller's construction invariant and
/// [`CancellationRequest::validate`] enforces it at the boundary so the
/// engine never sees a malformed funding breakdown.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CancellationRequest {
    pub booking: u32,
    pub start_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub number_of_days: i64,
    pub credits_applied: Decimal,
    pub bonus_applied: Decimal,
    pub charge_amount: Decimal,
}

impl CancellationRequest {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("total_amount", self.total_amount),
            ("credits_applied", self.credits_applied),
            ("bonus_applied", self.bonus_applied),
            ("charge_amount", self.charge_amount),
        ] {
            Amount::new(value).map_err(|_| {
                RefundError::ValidationError(format!("{field} must not be negative"))
            })?;
        }

        let funded = self.credits_applied + self.bonus_applied + self.charge_amount;
        if funded != self.total_amount {
            return Err(RefundError::ValidationError(format!(
                "funding breakdown {funded} does not match trip cost {}",
                self.total_amount
            )));
        }

        Ok(())
    }
}
