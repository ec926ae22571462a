use chrono::{Local, NaiveDate};

/// Check whether `input` parses as a calendar date under `format`
/// (strftime syntax, e.g. `%Y-%m-%d`).
pub fn validate(input: &str, format: &str) -> bool {
    NaiveDate::parse_from_str(input, format).is_ok()
}

/// Today's date in the given format.
pub fn today(format: &str) -> String {
    Local::now().format(format).to_string()
}

/// Today's date in `YYYY-MM-DD`, the fallback used when a supplied date
/// fails validation.
pub fn today_iso() -> String {
    today("%Y-%m-%d")
}

/// Reformat `input` to the canonical `format`, if it parses under that
/// format. Returns `None` for unparseable input.
pub fn reformat(input: &str, format: &str) -> Option<String> {
    NaiveDate::parse_from_str(input, format)
        .ok()
        .map(|d| d.format(format).to_string())
}
