#[macro_use]
extern crate serde;

mod error;
pub use error::CodecError;

mod timestamp;
pub use timestamp::parse_timestamp;

mod loader;
pub use loader::{TIMESTAMP_COLUMN, load_events_csv, load_events_reader};
