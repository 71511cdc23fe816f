use crate::domain::money::round_to_cents;
use rust_decimal::Decimal;
use serde::Serialize;

/// How a cancellation penalty is carved out of the payment sources that
/// funded the booking, and what each source gets back afterwards.
///
/// The three `penalty_from_*` components always sum to the input penalty at
/// cent precision.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PenaltyDistribution {
    pub penalty_from_credits: Decimal,
    pub penalty_from_bonus: Decimal,
    pub penalty_from_card: Decimal,
    pub credits_restored: Decimal,
    pub bonus_restored: Decimal,
    pub card_refund: Decimal,
}

impl PenaltyDistribution {
    fn without_penalty(
        credits_applied: Decimal,
        bonus_applied: Decimal,
        charge_amount: Decimal,
    ) -> Self {
        Self {
            penalty_from_credits: round_to_cents(Decimal::ZERO),
            penalty_from_bonus: round_to_cents(Decimal::ZERO),
            penalty_from_card: round_to_cents(Decimal::ZERO),
            credits_restored: credits_applied,
            bonus_restored: bonus_applied,
            card_refund: charge_amount,
        }
    }
}

/// Splits `penalty_amount` across the three payment sources in proportion to
/// how much each funded of `trip_cost`.
///
/// The credits and bonus components are rounded independently; the card
/// component takes the exact remainder so the three always reconcile to the
/// penalty without a one-cent gap. Degenerate inputs (non-positive penalty
/// or trip cost) fall into the no-penalty distribution; this function never
/// fails.
pub fn distribute_penalty(
    penalty_amount: Decimal,
    trip_cost: Decimal,
    credits_applied: Decimal,
    bonus_applied: Decimal,
    charge_amount: Decimal,
) -> PenaltyDistribution {
    if penalty_amount <= Decimal::ZERO || trip_cost <= Decimal::ZERO {
        return PenaltyDistribution::without_penalty(credits_applied, bonus_applied, charge_amount);
    }

    let credit_ratio = credits_applied / trip_cost;
    let bonus_ratio = bonus_applied / trip_cost;

    let penalty_from_credits = round_to_cents(penalty_amount * credit_ratio);
    let penalty_from_bonus = round_to_cents(penalty_amount * bonus_ratio);
    let penalty_from_card =
        round_to_cents(penalty_amount - penalty_from_credits - penalty_from_bonus);

    PenaltyDistribution {
        penalty_from_credits,
        penalty_from_bonus,
        penalty_from_card,
        credits_restored: round_to_cents(credits_applied - penalty_from_credits),
        bonus_restored: round_to_cents(bonus_applied - penalty_from_bonus),
        card_refund: round_to_cents(charge_amount - penalty_from_card),
    }
}
