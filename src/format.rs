//! Deadline Formatting
//!
//! Display-only parsing of backend timestamp strings.

use chrono::NaiveDateTime;

/// Shapes the backend is known to hand out (`datetime-local` input values,
/// with or without seconds).
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Format an ISO-like deadline for display.
///
/// Unparseable input falls back to the raw string; a deadline is never an
/// error at render time.
pub fn format_deadline(raw: &str) -> String {
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minute_precision() {
        assert_eq!(format_deadline("2024-01-01T10:00"), "01 Jan 2024, 10:00");
    }

    #[test]
    fn test_format_second_precision() {
        assert_eq!(format_deadline("2024-12-31T23:59:30"), "31 Dec 2024, 23:59");
    }

    #[test]
    fn test_unparseable_falls_back_to_raw() {
        assert_eq!(format_deadline("soonish"), "soonish");
        assert_eq!(format_deadline(""), "");
    }
}
