use chrono::{DateTime, TimeDelta, Utc};

pub trait Clock {
    fn now(&mut self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Never hands out the same millisecond twice, so ids derived from the
/// timestamp stay unique within a session.
pub struct MonotonicClock<C> {
    inner: C,
    last: Option<DateTime<Utc>>,
}

impl<C: Clock> MonotonicClock<C> {
    pub fn new(inner: C) -> Self {
        Self { inner, last: None }
    }
}

impl<C: Clock> Clock for MonotonicClock<C> {
    fn now(&mut self) -> DateTime<Utc> {
        let now = self.inner.now();
        let next = match self.last {
            Some(last) if now.timestamp_millis() <= last.timestamp_millis() => last + TimeDelta::milliseconds(1),
            _ => now,
        };
        self.last = Some(next);
        next
    }
}

/// Always reports the same instant. Meant for tests and replays.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&mut self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::workout::WorkoutId;

    #[test]
    fn monotonic_clock_bumps_repeated_millis() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let mut clock = MonotonicClock::new(FixedClock(instant));

        let first = clock.now();
        let second = clock.now();
        let third = clock.now();

        assert_eq!(first, instant);
        assert_eq!(second - first, TimeDelta::milliseconds(1));
        assert_eq!(third - second, TimeDelta::milliseconds(1));
        assert_ne!(WorkoutId::from_date(&first), WorkoutId::from_date(&second));
    }

    #[test]
    fn monotonic_clock_passes_through_advancing_time() {
        let start = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let mut clock = MonotonicClock::new(FixedClock(start));
        clock.now();

        clock.inner.0 = start + TimeDelta::seconds(5);
        assert_eq!(clock.now(), start + TimeDelta::seconds(5));
    }
}
