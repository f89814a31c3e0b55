//! Human-readable time formatting

use std::time::Duration;

/// Render seconds as a zero-padded `MM:SS` countdown clock.
///
/// Minutes are not wrapped into hours, so 90 minutes renders as `90:00`.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Render seconds as whole hours and minutes, e.g. `1h 30m`
pub fn format_hours_minutes(seconds: u64) -> String {
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Render an elapsed duration as `1h 2m 3s`, dropping leading zero units
pub fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(299), "04:59");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5400), "90:00");
    }

    #[test]
    fn hours_minutes_truncates_seconds() {
        assert_eq!(format_hours_minutes(0), "0h 0m");
        assert_eq!(format_hours_minutes(1500), "0h 25m");
        assert_eq!(format_hours_minutes(5459), "1h 30m");
    }

    #[test]
    fn uptime_drops_leading_units() {
        assert_eq!(format_uptime(Duration::from_secs(7)), "7s");
        assert_eq!(format_uptime(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(3725)), "1h 2m 5s");
    }
}
