//! Table-number extraction.

/// Shown when no table number can be found.
pub const TABLE_PLACEHOLDER: &str = "TBD";

/// Pull the first run of digits from each comma-separated table entry.
///
/// `"T5, 12a, patio"` becomes `"5,12"`. Entries without digits are dropped;
/// when nothing is left the result is "TBD".
pub fn extract_table_numbers(table_spec: Option<&str>) -> String {
    let spec = match table_spec {
        Some(s) if !s.is_empty() => s,
        _ => return TABLE_PLACEHOLDER.to_string(),
    };

    let numbers: Vec<&str> = spec.split(',').filter_map(first_digit_run).collect();

    if numbers.is_empty() {
        TABLE_PLACEHOLDER.to_string()
    } else {
        numbers.join(",")
    }
}

fn first_digit_run(segment: &str) -> Option<&str> {
    let start = segment.find(|c: char| c.is_ascii_digit())?;
    let rest = &segment[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}
