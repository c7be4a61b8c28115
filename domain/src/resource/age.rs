//! Age column formatting.
//!
//! Ages are the wall-clock time since creation, rounded to whole seconds and
//! written as hours, minutes and seconds (`45s`, `3m7s`, `26h0m4s`). There is
//! no day unit.

use chrono::{DateTime, TimeDelta, Utc};

/// Placeholder for objects that carry no creation timestamp.
pub const UNKNOWN_AGE: &str = "<unknown>";

/// Format an elapsed duration. Negative durations (clock skew) print as `0s`.
pub fn format_age(elapsed: TimeDelta) -> String {
    let millis = elapsed.num_milliseconds().max(0);
    let total = (millis + 500) / 1000;
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Age of an object created at `created`, as seen at `now`.
pub fn age_since(created: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match created {
        Some(created) => format_age(now - created),
        None => UNKNOWN_AGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age_units() {
        assert_eq!(format_age(TimeDelta::zero()), "0s");
        assert_eq!(format_age(TimeDelta::seconds(45)), "45s");
        assert_eq!(format_age(TimeDelta::seconds(187)), "3m7s");
        assert_eq!(format_age(TimeDelta::seconds(3600)), "1h0m0s");
        assert_eq!(format_age(TimeDelta::seconds(26 * 3600 + 4)), "26h0m4s");
    }

    #[test]
    fn test_format_age_rounds_to_nearest_second() {
        assert_eq!(format_age(TimeDelta::milliseconds(1499)), "1s");
        assert_eq!(format_age(TimeDelta::milliseconds(1500)), "2s");
        assert_eq!(format_age(TimeDelta::milliseconds(59_600)), "1m0s");
    }

    #[test]
    fn test_negative_age_clamps() {
        assert_eq!(format_age(TimeDelta::seconds(-5)), "0s");
    }

    #[test]
    fn test_age_since() {
        let now = Utc::now();
        assert_eq!(age_since(Some(now - TimeDelta::seconds(90)), now), "1m30s");
        assert_eq!(age_since(None, now), UNKNOWN_AGE);
    }
}
