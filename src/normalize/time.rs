//! Booking time window computation.

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{Duration, NaiveTime};

/// How long a table is held.
pub const BOOKING_DURATION_HOURS: i64 = 2;

/// Accepted input forms, tried in order.
const TIME_FORMATS: [&str; 4] = [
    "%I:%M %p", // 7:30 PM
    "%H:%M",    // 19:30
    "%I%p",     // 7PM
    "%I:%M%p",  // 7:30PM
];

/// Parse a time of day in one of the accepted forms.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if !digit_fields_well_formed(trimmed) {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| parse_with_format(trimmed, fmt))
}

/// Hour and minute fields must start with a digit. chrono skips whitespace
/// before numeric fields, which would accept "7: 30 PM".
fn digit_fields_well_formed(s: &str) -> bool {
    let starts_with_digit = |part: &str| part.starts_with(|c: char| c.is_ascii_digit());
    starts_with_digit(s) && s.split(':').skip(1).all(starts_with_digit)
}

fn parse_with_format(s: &str, fmt: &str) -> Option<NaiveTime> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, s, StrftimeItems::new(fmt)).ok()?;
    if !fmt.contains("%M") {
        parsed.set_minute(0).ok()?;
    }
    parsed.to_naive_time().ok()
}

/// Format as 12-hour clock without a leading zero, e.g. "7:30 PM".
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Compute "<start> - <end>" where end is two hours after start.
///
/// Unparseable input is echoed on both sides: `"garbage - garbage"`.
pub fn time_range(raw: &str) -> String {
    match parse_time(raw) {
        Some(start) => {
            let end = start + Duration::hours(BOOKING_DURATION_HOURS);
            format!("{} - {}", format_time(start), format_time(end))
        }
        None => format!("{} - {}", raw, raw),
    }
}
