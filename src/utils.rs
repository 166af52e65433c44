pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format a platform timestamp as `YYYY-MM-DD HH:MM`, falling through to the
/// raw string when it is not a timestamp we recognize.
pub fn format_datetime(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}
