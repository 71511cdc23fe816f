use thiserror::Error;

pub type Result<T> = std::result::Result<T, RefundError>;

#[derive(Error, Debug)]
pub enum RefundError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Timestamp error: {0}")]
    TimestampError(#[from] chrono::ParseError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
