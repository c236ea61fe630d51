//! Station records and their parser.

mod error;
mod parser;
mod station;

pub use error::{ParseError, RecordError};
pub use parser::{SENTINEL, StationParser};
pub use station::{Station, link_for_key};
