//! Formatting of backend values for display.

/// Placeholder for a missing value in the listing.
pub const MISSING: &str = "-";

/// Format a repository timestamp (`2024-05-02T08:00:00.000+0000`) as
/// `2024-05-02 08:00`.
///
/// Anything that does not look like an ISO timestamp is shown as-is.
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    let Some(ts) = timestamp else {
        return MISSING.to_string();
    };
    match (ts.get(..10), ts.get(10..11), ts.get(11..16)) {
        (Some(date), Some("T"), Some(time)) => format!("{date} {time}"),
        _ => ts.to_string(),
    }
}

/// Listing footer shown when the backend holds more children than the
/// first page.
pub fn format_page_note(shown: usize, total: Option<u64>) -> String {
    match total {
        Some(total) => format!("Showing {shown} of {total} items"),
        None => format!("Showing the first {shown} items"),
    }
}
