//! String helpers for table cells.

use chrono::NaiveDate;
use wallet_core::storage::DATE_FORMAT;

/// Truncate to `max_len` characters, ending with "..." when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// Keep the last characters of `s`, starting with "..." when cut, so a
/// long wallet path still shows its file name.
pub fn truncate_start(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().skip(count - max_len.saturating_sub(3)).collect();
    format!("...{}", kept)
}

/// Collapse a description onto one line.
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

/// Render an optional date; a record that was never edited shows "-".
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}
