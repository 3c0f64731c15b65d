use chrono::{DateTime, SecondsFormat, Utc};

/// Issues ISO-8601 UTC timestamps that never go backwards, even when the wall
/// clock does. Callers own the serialization (the clock lives under the store lock).
#[derive(Debug, Default, Clone)]
pub struct MonotonicClock {
    last: Option<DateTime<Utc>>,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_timestamp(&mut self) -> String {
        self.tick(Utc::now())
    }

    /// Raise the floor to an already issued timestamp, e.g. one read back from disk.
    /// Unparsable values are ignored.
    pub fn observe(&mut self, timestamp: &str) {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
            let parsed = parsed.with_timezone(&Utc);
            if self.last.is_none_or(|last| parsed > last) {
                self.last = Some(parsed);
            }
        }
    }

    fn tick(&mut self, now: DateTime<Utc>) -> String {
        let issued = match self.last {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last = Some(issued);
        format_timestamp(issued)
    }
}

pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod monotonic_clock_tests {
    use super::*;
    use chrono::Duration;
    use rstest::rstest;

    #[rstest]
    fn it_should_issue_utc_iso_timestamps() {
        let mut clock = MonotonicClock::new();
        let issued = clock.next_timestamp();
        assert!(issued.ends_with("+00:00"));
        assert!(DateTime::parse_from_rfc3339(&issued).is_ok());
    }

    #[rstest]
    fn it_should_never_go_backwards_when_the_wall_clock_does() {
        let mut clock = MonotonicClock::new();
        let now = Utc::now();
        let first = clock.tick(now);
        let second = clock.tick(now - Duration::seconds(5));
        assert_eq!(first, second);
        let third = clock.tick(now + Duration::seconds(1));
        assert!(third > second);
    }

    #[rstest]
    fn it_should_respect_observed_timestamps_from_the_future() {
        let mut clock = MonotonicClock::new();
        let future = Utc::now() + Duration::hours(1);
        clock.observe(&format_timestamp(future));
        assert_eq!(clock.next_timestamp(), format_timestamp(future));
    }

    #[rstest]
    fn it_should_ignore_unparsable_observations() {
        let mut clock = MonotonicClock::new();
        clock.observe("yesterday-ish");
        assert!(clock.last.is_none());
    }
}
