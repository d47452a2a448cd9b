use std::{fs::File, io::Read, path::Path};

use sleepscan_types::EventLog;

use crate::{CodecError, parse_timestamp};

pub const TIMESTAMP_COLUMN: &str = "timestamp";

#[derive(Debug, Deserialize)]
struct EventRecord {
    timestamp: String,
}

pub fn load_events_csv(path: impl AsRef<Path>) -> Result<EventLog, CodecError> {
    let file = File::open(path)?;
    load_events_reader(file)
}

/// Reads the `timestamp` column of a headed CSV. Other columns are ignored.
/// The first unparsable row aborts the load.
pub fn load_events_reader<R: Read>(reader: R) -> Result<EventLog, CodecError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = reader.headers()?.clone();
    if !headers.iter().any(|h| h == TIMESTAMP_COLUMN) {
        return Err(CodecError::MissingTimestampColumn(TIMESTAMP_COLUMN));
    }

    let mut events = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: EventRecord = record.deserialize(Some(&headers))?;

        let time = parse_timestamp(&row.timestamp).ok_or_else(|| CodecError::InvalidTimestamp {
            line,
            value: row.timestamp.clone(),
        })?;
        events.push(time);
    }

    Ok(EventLog::from_unsorted(events))
}
