use chrono::{DateTime, Utc};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rental_cancellation::application::engine::{CancellationOutcome, CancellationPolicyEngine};
use rental_cancellation::domain::cancellation::ARIZONA_UTC_OFFSET_HOURS;
use rental_cancellation::interfaces::csv::request_reader::RequestReader;
use rental_cancellation::interfaces::csv::result_writer::ResultWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input cancellation requests CSV file
    input: PathBuf,

    /// Evaluation time as RFC 3339 (defaults to the current time)
    #[arg(long)]
    now: Option<String>,

    /// Fixed UTC offset of the rental region in whole hours (no DST)
    #[arg(long, default_value_t = ARIZONA_UTC_OFFSET_HOURS, allow_hyphen_values = true)]
    utc_offset_hours: i32,

    /// Emit results as JSON lines instead of CSV
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let engine = CancellationPolicyEngine::with_offset_hours(cli.utc_offset_hours)
        .into_diagnostic()?;

    let now: DateTime<Utc> = match &cli.now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .into_diagnostic()?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    // Process requests, skipping rows that fail to parse or validate.
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let mut outcomes: Vec<CancellationOutcome> = Vec::new();
    for request_result in reader.requests() {
        match request_result {
            Ok(request) => match request.validate() {
                Ok(()) => outcomes.push(engine.process_request(now, &request)),
                Err(e) => {
                    tracing::warn!(booking = request.booking, "Skipping invalid request: {e}");
                }
            },
            Err(e) => {
                tracing::warn!("Skipping unreadable request row: {e}");
            }
        }
    }

    // Output final results
    let stdout = io::stdout();
    if cli.json {
        use std::io::Write;
        let mut lock = stdout.lock();
        for outcome in outcomes {
            let line = serde_json::to_string(&outcome).into_diagnostic()?;
            writeln!(lock, "{line}").into_diagnostic()?;
        }
    } else {
        let mut writer = ResultWriter::new(stdout.lock());
        writer.write_outcomes(outcomes).into_diagnostic()?;
    }

    Ok(())
}
