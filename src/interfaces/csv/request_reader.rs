use crate::domain::request::CancellationRequest;
use crate::error::{RefundError, Result};
use std::io::Read;

/// Reads cancellation requests from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over
/// `Result<CancellationRequest>`, trimming whitespace and tolerating
/// flexible record lengths so one malformed row never aborts the batch.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<CancellationRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RefundError::from))
    }
}
