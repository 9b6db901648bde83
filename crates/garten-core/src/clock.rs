//! Injected time source.
//!
//! Month gates, TTL checks and days-since statistics all depend on "now";
//! components take a `Clock` so tests can pin the date instead of reading
//! the wall clock.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current instant, used for timestamps and TTL arithmetic.
    fn now(&self) -> DateTime<Utc>;

    /// Wall-clock date and time in the user's timezone, used for
    /// calendar logic (seasonal windows, reminder scheduling).
    fn now_local(&self) -> NaiveDateTime;
}

/// Production clock reading system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant, for tests.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    local: NaiveDateTime,
}

impl FixedClock {
    /// Pin the clock to the given UTC instant; local time is taken to be
    /// the same wall-clock reading.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            local: instant.naive_utc(),
        }
    }

    /// Pin UTC instant and local wall-clock reading separately.
    pub fn with_local(instant: DateTime<Utc>, local: NaiveDateTime) -> Self {
        Self { instant, local }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn now_local(&self) -> NaiveDateTime {
        self.local
    }
}
