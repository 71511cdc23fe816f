use crate::domain::money::round_to_cents;
use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Fixed offset for the default rental region. Arizona does not observe
/// daylight saving time, so a constant UTC-7 is correct year-round and no
/// timezone database lookup is needed.
pub const ARIZONA_UTC_OFFSET_HOURS: i32 = -7;

/// Cancellations at least this many hours before pickup are free.
pub const FREE_CANCELLATION_WINDOW_HOURS: Decimal = dec!(24);

/// Trips longer than this many days pay a full-day late penalty; shorter
/// trips pay a half-day penalty.
pub const SHORT_TRIP_MAX_DAYS: i64 = 2;

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Severity of a cancellation, decided purely from the hours remaining
/// before pickup and the trip length.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum CancellationTier {
    Free,
    LateLong,
    LateShort,
}

impl CancellationTier {
    /// The free window boundary is inclusive: exactly 24 hours out is still
    /// a free cancellation.
    pub fn classify(hours_until_pickup: Decimal, safe_days: i64) -> Self {
        if hours_until_pickup >= FREE_CANCELLATION_WINDOW_HOURS {
            Self::Free
        } else if safe_days > SHORT_TRIP_MAX_DAYS {
            Self::LateLong
        } else {
            Self::LateShort
        }
    }
}

/// The outcome of a refund computation.
///
/// All monetary fields carry two fractional digits. `label` is a
/// presentation convenience and always agrees with the structured fields.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CancellationResult {
    pub tier: CancellationTier,
    pub penalty_amount: Decimal,
    pub penalty_days: Decimal,
    pub refund_amount: Decimal,
    pub refund_percentage: u32,
    /// The security deposit is a separate hold and is released regardless
    /// of tier.
    pub deposit_refunded: bool,
    pub label: String,
    pub hours_until_pickup: Decimal,
    pub average_daily_cost: Decimal,
}

/// Computes the refund for cancelling a booking at `now`.
///
/// Both instants are interpreted in the region's fixed offset. A pickup
/// already in the past floors to zero hours, which lands in the late window
/// rather than a negative state, and a non-positive trip length clamps to
/// one day before any division.
///
/// Rounding to cents happens at the penalty step and again when deriving the
/// refund. Collapsing these into a single end-of-pipeline rounding changes
/// the result by up to a cent in edge cases.
pub fn compute_refund(
    now: DateTime<Utc>,
    start_date: DateTime<Utc>,
    offset: FixedOffset,
    total_amount: Decimal,
    number_of_days: i64,
) -> CancellationResult {
    let now_local = now.with_timezone(&offset);
    let start_local = start_date.with_timezone(&offset);
    let millis = start_local
        .signed_duration_since(now_local)
        .num_milliseconds()
        .max(0);
    let hours_until_pickup = Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR);

    let safe_days = number_of_days.max(1);
    let average_daily_cost = total_amount / Decimal::from(safe_days);

    let tier = CancellationTier::classify(hours_until_pickup, safe_days);
    let (penalty_amount, penalty_days) = match tier {
        CancellationTier::Free => (round_to_cents(Decimal::ZERO), Decimal::ZERO),
        CancellationTier::LateLong => (round_to_cents(average_daily_cost), dec!(1)),
        CancellationTier::LateShort => {
            (round_to_cents(average_daily_cost * dec!(0.5)), dec!(0.5))
        }
    };

    let refund_amount = match tier {
        CancellationTier::Free => total_amount,
        _ => round_to_cents((total_amount - penalty_amount).max(Decimal::ZERO)),
    };

    let refund_percentage = match tier {
        CancellationTier::Free => 100,
        _ if total_amount > Decimal::ZERO => (refund_amount / total_amount
            * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0),
        _ => 0,
    };

    let label = match tier {
        CancellationTier::Free => "Free cancellation with 100% refund".to_string(),
        CancellationTier::LateLong => {
            format!("Late cancellation with a 1 day penalty of ${penalty_amount}")
        }
        CancellationTier::LateShort => {
            format!("Late cancellation with a half day penalty of ${penalty_amount}")
        }
    };

    CancellationResult {
        tier,
        penalty_amount,
        penalty_days,
        refund_amount,
        refund_percentage,
        deposit_refunded: true,
        label,
        hours_until_pickup,
        average_daily_cost,
    }
}
