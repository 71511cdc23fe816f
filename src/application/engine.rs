use crate::domain::cancellation::{self, ARIZONA_UTC_OFFSET_HOURS, CancellationResult, CancellationTier};
use crate::domain::distribution::{self, PenaltyDistribution};
use crate::domain::money::round_to_cents;
use crate::domain::request::CancellationRequest;
use crate::error::{RefundError, Result};
use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// The main entry point for cancellation and refund policy decisions.
///
/// `CancellationPolicyEngine` carries the one piece of regional
/// configuration the policy needs: the fixed UTC offset used to interpret
/// trip timing. It is stateless otherwise; every operation is a pure
/// function of its inputs.
pub struct CancellationPolicyEngine {
    offset: FixedOffset,
}

impl Default for CancellationPolicyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationPolicyEngine {
    /// Creates an engine for the default region (Arizona, fixed UTC-7).
    pub fn new() -> Self {
        let offset = FixedOffset::east_opt(ARIZONA_UTC_OFFSET_HOURS * 3600)
            .expect("UTC-7 is a valid fixed offset");
        Self { offset }
    }

    /// Creates an engine for a region with the given fixed UTC offset.
    ///
    /// Only whole-hour, no-DST offsets are supported; regions that observe
    /// daylight saving cannot be modeled with a constant offset.
    pub fn with_offset_hours(hours: i32) -> Result<Self> {
        let offset = FixedOffset::east_opt(hours * 3600).ok_or_else(|| {
            RefundError::ValidationError(format!("invalid UTC offset: {hours} hours"))
        })?;
        Ok(Self { offset })
    }

    /// Computes the refund for cancelling now, against the system clock.
    pub fn compute_refund(
        &self,
        start_date: DateTime<Utc>,
        total_amount: Decimal,
        number_of_days: i64,
    ) -> CancellationResult {
        self.compute_refund_at(Utc::now(), start_date, total_amount, number_of_days)
    }

    /// Computes the refund for cancelling at an explicit instant.
    pub fn compute_refund_at(
        &self,
        now: DateTime<Utc>,
        start_date: DateTime<Utc>,
        total_amount: Decimal,
        number_of_days: i64,
    ) -> CancellationResult {
        cancellation::compute_refund(now, start_date, self.offset, total_amount, number_of_days)
    }

    /// Scales a total by a flat percentage, rounded to cents.
    ///
    /// Kept for call sites that already carry a percentage rather than
    /// day-based inputs; no tier logic is applied.
    pub fn apply_percentage(&self, total_amount: Decimal, percentage: Decimal) -> Decimal {
        round_to_cents(total_amount * percentage / Decimal::ONE_HUNDRED)
    }

    /// Splits a penalty proportionally across the payment sources that
    /// funded the booking.
    pub fn distribute_penalty(
        &self,
        penalty_amount: Decimal,
        trip_cost: Decimal,
        credits_applied: Decimal,
        bonus_applied: Decimal,
        charge_amount: Decimal,
    ) -> PenaltyDistribution {
        distribution::distribute_penalty(
            penalty_amount,
            trip_cost,
            credits_applied,
            bonus_applied,
            charge_amount,
        )
    }

    /// Processes one cancellation request: computes the refund, then carves
    /// the penalty out of the request's funding breakdown.
    pub fn process_request(
        &self,
        now: DateTime<Utc>,
        request: &CancellationRequest,
    ) -> CancellationOutcome {
        let result = self.compute_refund_at(
            now,
            request.start_date,
            request.total_amount,
            request.number_of_days,
        );
        let split = self.distribute_penalty(
            result.penalty_amount,
            request.total_amount,
            request.credits_applied,
            request.bonus_applied,
            request.charge_amount,
        );
        CancellationOutcome::new(request.booking, result, split)
    }
}

/// Flat output row for one processed cancellation, ready for CSV or JSON
/// serialization.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CancellationOutcome {
    pub booking: u32,
    pub tier: CancellationTier,
    pub hours_until_pickup: Decimal,
    pub penalty_days: Decimal,
    pub penalty_amount: Decimal,
    pub refund_amount: Decimal,
    pub refund_percentage: u32,
    pub deposit_refunded: bool,
    pub penalty_from_credits: Decimal,
    pub penalty_from_bonus: Decimal,
    pub penalty_from_card: Decimal,
    pub credits_restored: Decimal,
    pub bonus_restored: Decimal,
    pub card_refund: Decimal,
    pub label: String,
}

impl CancellationOutcome {
    fn new(booking: u32, result: CancellationResult, split: PenaltyDistribution) -> Self {
        let mut hours = result
            .hours_until_pickup
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        hours.rescale(2);
        Self {
            booking,
            tier: result.tier,
            hours_until_pickup: hours,
            penalty_days: result.penalty_days,
            penalty_amount: result.penalty_amount,
            refund_amount: result.refund_amount,
            refund_percentage: result.refund_percentage,
            deposit_refunded: result.deposit_refunded,
            penalty_from_credits: split.penalty_from_credits,
            penalty_from_bonus: split.penalty_from_bonus,
            penalty_from_card: split.penalty_from_card,
            credits_restored: split.credits_restored,
            bonus_restored: split.bonus_restored,
            card_refund: split.card_refund,
            label: result.label,
        }
    }
}
