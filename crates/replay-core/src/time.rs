//! Conversion between `MM:SS` game-time text and integer seconds.
//!
//! Parsing is lenient: the upstream parser already emits well-formed
//! timestamps, so anything unreadable maps to second 0 instead of failing.

/// Parse `"M:SS"`, `"MM:SS"`, or `"H:MM:SS"` into seconds.
///
/// Each colon-separated field folds as `acc * 60 + field`. Returns `0` for
/// empty text, text without a colon, more than three fields, a non-numeric
/// field, or a value that overflows `u32`.
pub fn to_seconds(text: &str) -> u32 {
    let text = text.trim();
    if text.is_empty() || !text.contains(':') {
        return 0;
    }
    if text.split(':').count() > 3 {
        return 0;
    }

    text.split(':')
        .try_fold(0_u32, |acc, field| {
            let value = field.trim().parse::<u32>().ok()?;
            acc.checked_mul(60)?.checked_add(value)
        })
        .unwrap_or(0)
}

/// Render seconds as `"<minutes>m <seconds>s"`.
pub fn to_display(seconds: u32) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

/// Render seconds as `"M:SS"`, the inverse of [`to_seconds`].
pub fn to_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Axis tick label: raw seconds followed by the display form.
pub fn axis_label(seconds: u32) -> String {
    format!("{seconds} ({})", to_display(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minutes_and_seconds() {
        assert_eq!(to_seconds("0:10"), 10);
        assert_eq!(to_seconds("1:05"), 65);
        assert_eq!(to_seconds("12:34"), 754);
    }

    #[test]
    fn parses_hours() {
        assert_eq!(to_seconds("1:02:03"), 3723);
    }

    #[test]
    fn malformed_text_is_zero() {
        assert_eq!(to_seconds(""), 0);
        assert_eq!(to_seconds("   "), 0);
        assert_eq!(to_seconds("90"), 0);
        assert_eq!(to_seconds("ab:cd"), 0);
        assert_eq!(to_seconds(":30"), 0);
        assert_eq!(to_seconds("-1:00"), 0);
        assert_eq!(to_seconds("1:2:3:4"), 0);
        assert_eq!(to_seconds("99999999:00"), 0);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(to_seconds(" 2:00 "), 120);
    }

    #[test]
    fn display_splits_minutes() {
        assert_eq!(to_display(0), "0m 0s");
        assert_eq!(to_display(75), "1m 15s");
        assert_eq!(to_display(600), "10m 0s");
    }

    #[test]
    fn clock_round_trips() {
        for text in ["0:00", "0:05", "3:59", "10:30", "59:59"] {
            assert_eq!(to_clock(to_seconds(text)), text);
        }
        for seconds in [0, 1, 59, 60, 61, 3599] {
            assert_eq!(to_seconds(&to_clock(seconds)), seconds);
        }
    }

    #[test]
    fn axis_label_includes_display() {
        assert_eq!(axis_label(75), "75 (1m 15s)");
    }
}
