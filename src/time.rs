//! A minimal date-time representation for time-series charts.
//!
//! Chart descriptions only carry timestamps; formatting tick labels is
//! the renderer's concern. A [`DateTime`] is a `f64` of seconds elapsed
//! since the Unix epoch. Timezone is not supported.

use core::{cmp, ops};

/// A point in time, in seconds elapsed since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DateTime(f64);

impl DateTime {
    /// The Unix epoch, 1970-01-01 00:00:00
    pub const fn epoch() -> Self {
        DateTime(0.0)
    }

    /// Build a datetime from a float timestamp in seconds.
    /// Returns None if the value is not finite.
    pub const fn from_timestamp(timestamp: f64) -> Option<Self> {
        if timestamp.is_finite() {
            Some(DateTime(timestamp))
        } else {
            None
        }
    }

    /// The timestamp in seconds elapsed since the Unix epoch.
    /// Guaranteed to be finite.
    pub const fn timestamp(&self) -> f64 {
        self.0
    }
}

/// A duration between two [`DateTime`] values, in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeDelta(f64);

impl TimeDelta {
    /// Build a time delta from a number of seconds.
    ///
    /// Panics if `secs` is not finite: datetime arithmetic must keep
    /// timestamps finite so [`DateTime`] stays totally ordered.
    pub const fn from_secs(secs: f64) -> Self {
        assert!(secs.is_finite());
        TimeDelta(secs)
    }

    /// The delta in seconds
    pub const fn secs(&self) -> f64 {
        self.0
    }
}

impl ops::Sub for DateTime {
    type Output = TimeDelta;

    fn sub(self, rhs: DateTime) -> TimeDelta {
        TimeDelta(self.0 - rhs.0)
    }
}

impl ops::Add<TimeDelta> for DateTime {
    type Output = DateTime;

    fn add(self, rhs: TimeDelta) -> DateTime {
        DateTime(self.0 + rhs.0)
    }
}

impl ops::AddAssign<TimeDelta> for DateTime {
    fn add_assign(&mut self, rhs: TimeDelta) {
        self.0 += rhs.0;
    }
}

impl cmp::Eq for DateTime {}

impl cmp::Ord for DateTime {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        // timestamps are guaranteed finite
        self.partial_cmp(other).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_round_trip() {
        let t = DateTime::from_timestamp(1_700_000_000.0).unwrap();
        assert_eq!(t.timestamp(), 1_700_000_000.0);
        assert!(DateTime::from_timestamp(f64::NAN).is_none());
        assert!(DateTime::from_timestamp(f64::INFINITY).is_none());
    }

    #[test]
    fn arithmetic() {
        let a = DateTime::from_timestamp(100.0).unwrap();
        let b = a + TimeDelta::from_secs(50.0);
        assert_eq!((b - a).secs(), 50.0);
        assert!(b > a);

        let mut c = a;
        c += TimeDelta::from_secs(25.0);
        assert_eq!(c.timestamp(), 125.0);
    }

    #[test]
    #[should_panic]
    fn delta_rejects_nan() {
        let _ = TimeDelta::from_secs(f64::NAN);
    }
}
