use crate::application::engine::CancellationOutcome;
use crate::error::Result;
use std::io::Write;

/// Writes processed cancellation outcomes as CSV.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(dest: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(dest),
        }
    }

    /// Serializes each outcome as one row, header first, and flushes.
    pub fn write_outcomes(&mut self, outcomes: Vec<CancellationOutcome>) -> Result<()> {
        for outcome in outcomes {
            self.writer.serialize(outcome)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
