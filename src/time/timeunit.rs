use core::fmt;
use std::time::Duration;

#[derive(Debug, PartialEq)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
}

impl TimeUnit {
    fn of(duration: &Duration) -> TimeUnit {
        let nanos = duration.as_nanos();
        if nanos < 1_000 {
            TimeUnit::Nanosecond
        } else if nanos < 1_000_000 {
            TimeUnit::Microsecond
        } else if nanos < 1_000_000_000 {
            TimeUnit::Millisecond
        } else {
            TimeUnit::Second
        }
    }

    fn nanos(&self) -> u128 {
        match self {
            TimeUnit::Nanosecond => 1,
            TimeUnit::Microsecond => 1_000,
            TimeUnit::Millisecond => 1_000_000,
            TimeUnit::Second => 1_000_000_000,
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Nanosecond => "ns",
            TimeUnit::Microsecond => "us",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Second => "s",
        }
    }
}

/// Compact rendering of a measured duration, scaled to the largest fitting
/// unit with at most three fractional digits.
pub struct DurationDisplay(Duration);

impl From<Duration> for DurationDisplay {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl fmt::Display for DurationDisplay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let nanos = self.0.as_nanos();
        let unit = TimeUnit::of(&self.0);
        let whole = nanos / unit.nanos();
        let fraction = (nanos % unit.nanos()) * 1_000 / unit.nanos();
        if fraction == 0 {
            write!(f, "{}{}", whole, unit.suffix())
        } else {
            let digits = format!("{:03}", fraction);
            write!(f, "{}.{}{}", whole, digits.trim_end_matches('0'), unit.suffix())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::time::timeunit::DurationDisplay;
    use crate::time::timeunit::TimeUnit;

    #[test]
    fn test_unit_selection_by_magnitude() {
        {
            let duration = Duration::from_nanos(999);
            assert_eq!(TimeUnit::of(&duration), TimeUnit::Nanosecond);
        }
        {
            let duration = Duration::from_nanos(1_000);
            assert_eq!(TimeUnit::of(&duration), TimeUnit::Microsecond);
        }
        {
            let duration = Duration::from_millis(200);
            assert_eq!(TimeUnit::of(&duration), TimeUnit::Millisecond);
        }
        {
            let duration = Duration::from_secs(90);
            assert_eq!(TimeUnit::of(&duration), TimeUnit::Second);
        }
    }

    #[test]
    fn test_display_trims_trailing_zeros() {
        {
            let shown = format!("{}", DurationDisplay::from(Duration::from_secs(1)));
            assert_eq!(shown, "1s");
        }
        {
            let shown = format!("{}", DurationDisplay::from(Duration::from_millis(1_500)));
            assert_eq!(shown, "1.5s");
        }
        {
            let shown = format!("{}", DurationDisplay::from(Duration::from_millis(200)));
            assert_eq!(shown, "200ms");
        }
        {
            let shown = format!("{}", DurationDisplay::from(Duration::from_nanos(1_234)));
            assert_eq!(shown, "1.234us");
        }
    }

    #[test]
    fn test_display_of_zero_and_truncation() {
        {
            let shown = format!("{}", DurationDisplay::from(Duration::default()));
            assert_eq!(shown, "0ns");
        }
        {
            let shown = format!("{}", DurationDisplay::from(Duration::from_nanos(999_999_999)));
            assert_eq!(shown, "999.999ms");
        }
    }
}
