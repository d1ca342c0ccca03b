//! Pure conversions from CLI text output to structured records.
//!
//! Nothing here performs I/O; callers hand in captured stdout.

mod detail;
mod listing;

pub use detail::{parse_detail, PARSE_ERROR_KEY, RAW_OUTPUT_KEY};
pub use listing::parse_listing;
