//! Duration Formatting Module
//!
//! Converts the provider's ISO-8601 duration encoding (`PT1H30M20S`) into
//! the human-readable form shown to learners.

use std::sync::OnceLock;

use regex::Regex;

static DURATION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn duration_pattern() -> &'static Regex {
    DURATION_PATTERN.get_or_init(|| {
        Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?")
            .expect("duration pattern is valid")
    })
}

// == Format Duration ==
/// Renders an ISO-8601 duration as `H:MM:SS`, or `M:SS` when under an hour.
///
/// Minutes and seconds are zero-padded; the leading unit never is.
/// Unparseable input renders as `0:00`.
pub fn format_duration(raw: &str) -> String {
    let captures = match duration_pattern().captures(raw) {
        Some(captures) => captures,
        None => return "0:00".to_string(),
    };

    let component = |index: usize| -> u64 {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    let hours = component(1);
    let minutes = component(2);
    let seconds = component(3);

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_duration() {
        assert_eq!(format_duration("PT1H2M3S"), "1:02:03");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_duration("PT5M9S"), "5:09");
    }

    #[test]
    fn test_seconds_only() {
        assert_eq!(format_duration("PT45S"), "0:45");
    }

    #[test]
    fn test_hours_only() {
        assert_eq!(format_duration("PT2H"), "2:00:00");
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(format_duration("PT30M"), "30:00");
    }

    #[test]
    fn test_long_duration() {
        assert_eq!(format_duration("PT10H59M59S"), "10:59:59");
    }

    #[test]
    fn test_unparseable_input() {
        assert_eq!(format_duration("garbage"), "0:00");
        assert_eq!(format_duration(""), "0:00");
    }
}
