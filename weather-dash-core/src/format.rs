use chrono::NaiveDateTime;

/// Shown in place of the local time when the provider string can't be parsed.
pub const TIME_UNAVAILABLE: &str = "Time Unavailable";

const INPUT_FORMAT: &str = "%Y/%m/%d %H:%M";
const OUTPUT_FORMAT: &str = "%A, %B %-d, %Y at %I:%M %p";

/// Render the provider's "YYYY-MM-DD HH:MM" local time as
/// "Sunday, October 5, 2025 at 06:45 AM".
pub fn format_local_time(raw: &str) -> String {
    let normalized = raw.trim().replace('-', "/");

    match NaiveDateTime::parse_from_str(&normalized, INPUT_FORMAT) {
        Ok(dt) => dt.format(OUTPUT_FORMAT).to_string(),
        Err(err) => {
            tracing::error!(raw, error = %err, "Error parsing local time");
            TIME_UNAVAILABLE.to_string()
        }
    }
}
