//! Rounding policies applied to raw provider durations.

use std::time::Duration;

/// Maps a raw driving duration to a whole number of minutes.
///
/// Two call sites in the HTTP surface need different numeric behaviour from
/// the same resolution pipeline, so the policy travels as a parameter of
/// [`crate::DurationResolver::resolve`] instead of being baked in.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use michinori_core::RoundingPolicy;
///
/// assert_eq!(RoundingPolicy::NearestMinute.minutes(Duration::from_secs(150)), 3);
/// assert_eq!(RoundingPolicy::FiveMinuteCeiling.minutes(Duration::from_secs(150)), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingPolicy {
    /// Round to the nearest minute, halves away from zero.
    NearestMinute,
    /// Round up to the next multiple of five minutes.
    ///
    /// Used where the surrounding planner prefers a safety margin over
    /// accuracy: an estimate that is never shorter than the real drive.
    FiveMinuteCeiling,
}

impl RoundingPolicy {
    /// Apply the policy to a raw duration.
    #[must_use]
    pub fn minutes(self, duration: Duration) -> u64 {
        let seconds = duration.as_secs_f64();
        let minutes = match self {
            // f64::round ties away from zero, which is the behaviour the
            // planner's consumers expect for half-minute durations.
            Self::NearestMinute => (seconds / 60.0).round(),
            Self::FiveMinuteCeiling => (seconds / 60.0 / 5.0).ceil() * 5.0,
        };
        minutes as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(150, 3)] // exact half rounds away from zero, not down
    #[case(179, 3)]
    #[case(181, 3)]
    #[case(90, 2)]
    #[case(0, 0)]
    #[case(29, 0)]
    #[case(30, 1)]
    fn nearest_minute_rounds_half_away_from_zero(#[case] seconds: u64, #[case] expected: u64) {
        let minutes = RoundingPolicy::NearestMinute.minutes(Duration::from_secs(seconds));
        assert_eq!(minutes, expected);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 5)]
    #[case(61, 5)]
    #[case(299, 5)]
    #[case(300, 5)] // exact multiples are not pushed to the next step
    #[case(301, 10)]
    #[case(1499, 25)]
    fn ceiling_rounds_up_to_five_minute_steps(#[case] seconds: u64, #[case] expected: u64) {
        let minutes = RoundingPolicy::FiveMinuteCeiling.minutes(Duration::from_secs(seconds));
        assert_eq!(minutes, expected);
    }

    #[rstest]
    fn fractional_seconds_participate_in_rounding() {
        let minutes = RoundingPolicy::NearestMinute.minutes(Duration::from_secs_f64(149.4));
        assert_eq!(minutes, 2);
    }
}
