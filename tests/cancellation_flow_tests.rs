use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const NOW: &str = "2026-08-01T12:00:00Z";
const HEADER: &str =
    "booking,start_date,total_amount,number_of_days,credits_applied,bonus_applied,charge_amount";

#[test]
fn test_free_cancellation_flow() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    // 48 hours out: no penalty, everything goes back where it came from.
    writeln!(file, "1,2026-08-03T12:00:00Z,300.00,3,60.00,40.00,200.00").unwrap();

    let mut cmd = Command::new(cargo_bin!("rental-cancellation"));
    cmd.arg(file.path()).arg("--now").arg(NOW);

    cmd.assert().success().stdout(predicate::str::contains(
        "1,free,48.00,0,0.00,300.00,100,true,0.00,0.00,0.00,60.00,40.00,200.00,Free cancellation with 100% refund",
    ));
}

#[test]
fn test_late_long_trip_flow() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    // 10 hours out, 3-day trip: one average day withheld, split 60/40/200.
    writeln!(file, "2,2026-08-01T22:00:00Z,300.00,3,60.00,40.00,200.00").unwrap();

    let mut cmd = Command::new(cargo_bin!("rental-cancellation"));
    cmd.arg(file.path()).arg("--now").arg(NOW);

    cmd.assert().success().stdout(predicate::str::contains(
        "2,late_long,10.00,1,100.00,200.00,67,true,20.00,13.33,66.67,40.00,26.67,133.33,Late cancellation with a 1 day penalty of $100.00",
    ));
}

#[test]
fn test_late_short_trip_flow() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    // 2 hours out, 2-day trip: half a day withheld, card-only funding.
    writeln!(file, "3,2026-08-01T14:00:00Z,120.00,2,0.00,0.00,120.00").unwrap();

    let mut cmd = Command::new(cargo_bin!("rental-cancellation"));
    cmd.arg(file.path()).arg("--now").arg(NOW);

    cmd.assert().success().stdout(predicate::str::contains(
        "3,late_short,2.00,0.5,30.00,90.00,75,true,0.00,0.00,30.00,0.00,0.00,90.00,Late cancellation with a half day penalty of $30.00",
    ));
}

#[test]
fn test_batch_preserves_request_order() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "10,2026-08-03T12:00:00Z,300.00,3,0.00,0.00,300.00").unwrap();
    writeln!(file, "11,2026-08-01T22:00:00Z,300.00,3,0.00,0.00,300.00").unwrap();

    let mut cmd = Command::new(cargo_bin!("rental-cancellation"));
    cmd.arg(file.path()).arg("--now").arg(NOW);

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = stdout.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("10,free"));
    assert!(rows[1].starts_with("11,late_long"));
}

#[test]
fn test_json_output_mode() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "2,2026-08-01T22:00:00Z,300.00,3,60.00,40.00,200.00").unwrap();

    let mut cmd = Command::new(cargo_bin!("rental-cancellation"));
    cmd.arg(file.path()).arg("--now").arg(NOW).arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"tier\":\"late_long\""))
        .stdout(predicate::str::contains("\"refund_amount\":\"200.00\""))
        .stdout(predicate::str::contains("\"deposit_refunded\":true"));
}

#[test]
fn test_custom_region_offset_accepted() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "4,2026-08-01T22:00:00Z,300.00,3,0.00,0.00,300.00").unwrap();

    // A different fixed offset shifts both instants equally, so the tier is
    // unchanged.
    let mut cmd = Command::new(cargo_bin!("rental-cancellation"));
    cmd.arg(file.path())
        .arg("--now")
        .arg(NOW)
        .arg("--utc-offset-hours")
        .arg("2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4,late_long,10.00"));
}
