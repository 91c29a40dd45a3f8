//! Time abstraction for testability.
//!
//! This module provides a [`Clock`] trait that allows injecting fixed clocks
//! in tests while using the real system clock in production. The embed
//! timestamp is the only time-dependent value in a notification.

use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};

/// Abstraction over system time for testability.
///
/// # Example
///
/// ```
/// use deploy_notify::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Production clock using actual system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Formats a point in time as an ISO-8601 UTC string with millisecond precision.
///
/// The output has the shape `2024-05-01T12:00:00.000Z`, which is what the
/// Discord API expects in the embed `timestamp` field.
#[must_use]
pub fn to_iso8601(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A clock frozen at a single instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub SystemTime);

#[cfg(test)]
impl FixedClock {
    /// Creates a clock frozen `secs` seconds after the Unix epoch.
    pub(crate) fn at_secs(secs: u64) -> Self {
        Self(SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(secs))
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn system_clock_returns_current_time() {
        let clock = SystemClock;
        let before = SystemTime::now();
        let result = clock.now();
        let after = SystemTime::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn system_clock_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemClock>();
    }

    #[test]
    fn fixed_clock_returns_controlled_time() {
        let clock = FixedClock::at_secs(1_000_000);
        let expected = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);

        assert_eq!(clock.now(), expected);
        assert_eq!(clock.now(), expected);
    }

    #[test]
    fn iso8601_of_epoch() {
        assert_eq!(to_iso8601(SystemTime::UNIX_EPOCH), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn iso8601_keeps_milliseconds() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_millis(1_714_564_800_123);

        assert_eq!(to_iso8601(time), "2024-05-01T12:00:00.123Z");
    }

    #[test]
    fn iso8601_truncates_below_milliseconds() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_micros(1_500);

        assert_eq!(to_iso8601(time), "1970-01-01T00:00:00.001Z");
    }
}
