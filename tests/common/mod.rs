use chrono::{Duration, TimeZone, Utc};
use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

fn format_cents(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Generates a CSV of valid cancellation requests with randomized amounts,
/// funding splits, trip lengths, and pickup offsets from the fixed batch
/// evaluation time 2026-08-01T12:00:00Z.
pub fn generate_requests_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record([
        "booking",
        "start_date",
        "total_amount",
        "number_of_days",
        "credits_applied",
        "bonus_applied",
        "charge_amount",
    ])?;

    let base = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
    let mut rng = rand::thread_rng();
    for booking in 1..=rows {
        let total_cents: i64 = rng.gen_range(0..500_000);
        let credits_cents = rng.gen_range(0..=total_cents);
        let bonus_cents = rng.gen_range(0..=(total_cents - credits_cents));
        let charge_cents = total_cents - credits_cents - bonus_cents;
        let days: i64 = rng.gen_range(1..=14);
        let hours_out: i64 = rng.gen_range(0..72);
        let start = base + Duration::hours(hours_out);

        wtr.write_record([
            booking.to_string(),
            start.to_rfc3339(),
            format_cents(total_cents),
            days.to_string(),
            format_cents(credits_cents),
            format_cents(bonus_cents),
            format_cents(charge_cents),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
