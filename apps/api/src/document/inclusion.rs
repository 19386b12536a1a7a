//! The non-fabrication gate.
//!
//! A value is shown iff its presence flag is set AND it is non-empty after
//! trimming. Every section builder goes through these helpers.

/// Rendered in a date range whose end flag is set but whose end value is empty.
pub const PRESENT: &str = "Present";

/// Returns the trimmed value if it may be rendered.
pub fn included(flag: bool, value: Option<&str>) -> Option<&str> {
    if !flag {
        return None;
    }
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trimmed, non-empty items of a flagged list. Empty when the flag is unset.
pub fn included_list(flag: bool, values: &[String]) -> Vec<&str> {
    if !flag {
        return Vec::new();
    }
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Builds a date (or year) range under the presence rules.
///
/// - start shown, end flag set → `"{start} - {end}"`, or `"{start} - Present"`
///   when the end value is empty
/// - start shown, end flag unset → `"{start}"`
/// - no start, end shown → `"Until {end}"`
/// - otherwise `None`
pub fn date_range(
    has_start: bool,
    start: Option<&str>,
    has_end: bool,
    end: Option<&str>,
) -> Option<String> {
    match included(has_start, start) {
        Some(start) if has_end => Some(format!(
            "{start} - {}",
            included(true, end).unwrap_or(PRESENT)
        )),
        Some(start) => Some(start.to_string()),
        None => included(has_end, end).map(|end| format!("Until {end}")),
    }
}
