//! Marker identification from radius-ratio signatures.

mod bank;
mod family;
mod line_parse;
mod tables;

pub use bank::{BankError, BankMatch, IdentifyError, MarkerBank, REJECTION_THRESHOLD};
pub use family::MarkerFamily;
pub use line_parse::parse_line;
