//! Field normalizers: turn raw booking cells into display text.
//!
//! None of these fail. Malformed input degrades to a placeholder.

mod name;
mod table;
mod time;

pub use name::{capitalize_name, GUEST_PLACEHOLDER, WALK_IN};
pub use table::{extract_table_numbers, TABLE_PLACEHOLDER};
pub use time::{format_time, parse_time, time_range, BOOKING_DURATION_HOURS};
