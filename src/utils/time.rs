use chrono::{DateTime, Duration, Utc};

// Anything longer than a century is treated as a century.
const MAX_HOURS: f64 = 24.0 * 366.0 * 100.0;

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Converts a (possibly fractional) hour count to a duration with millisecond
/// precision. Negative or NaN input yields a zero duration.
pub fn hours_to_duration(hours: f64) -> Duration {
    if hours.is_nan() || hours <= 0.0 {
        return Duration::zero();
    }
    Duration::milliseconds((hours.min(MAX_HOURS) * 3_600_000.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_and_fractional_hours() {
        assert_eq!(hours_to_duration(2.0), Duration::hours(2));
        assert_eq!(hours_to_duration(0.25), Duration::minutes(15));
    }

    #[test]
    fn negative_and_nan_are_zero() {
        assert_eq!(hours_to_duration(-1.0), Duration::zero());
        assert_eq!(hours_to_duration(f64::NAN), Duration::zero());
    }

    #[test]
    fn huge_values_are_capped() {
        assert_eq!(hours_to_duration(f64::INFINITY), hours_to_duration(MAX_HOURS));
    }
}
