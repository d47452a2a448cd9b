use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to read event log: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv has no `{0}` column")]
    MissingTimestampColumn(&'static str),
    #[error("line {line}: invalid timestamp `{value}`")]
    InvalidTimestamp { line: u64, value: String },
}
