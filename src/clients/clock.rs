//! Time source for request timestamps.
//!
//! The `Timestamp` parameter is captured when a request is built. Clients
//! read it from a [`Clock`] handed to them at construction, so tests can pin
//! the value without touching global state.

use std::fmt;

use chrono::{DateTime, Utc};

/// A source of the current time.
pub trait Clock: fmt::Debug + Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always returns the same instant.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use mws_api::clients::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2015, 10, 20, 22, 46, 7).unwrap();
/// assert_eq!(FixedClock::new(instant).now(), instant);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_is_frozen() {
        let instant = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn test_system_clock_advances() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
