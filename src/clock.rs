use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local};
use parking_lot::Mutex;

/// Source of "now" for the countdown.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

// Local wall clock pinned to the current system offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let local = Local::now();
        local.with_timezone(local.offset())
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.now.lock() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn fixed_clock_set_is_shared_by_clones() {
        let clock = FixedClock::new(at("2024-09-02T07:00:00+02:00"));
        assert_eq!(clock.now(), at("2024-09-02T07:00:00+02:00"));

        let shared = clock.clone();
        shared.set(at("2025-01-01T00:00:00+02:00"));
        assert_eq!(clock.now(), at("2025-01-01T00:00:00+02:00"));
    }

    #[test]
    fn system_clock_uses_local_offset() {
        let now = SystemClock.now();
        assert_eq!(now.offset().local_minus_utc(), Local::now().offset().local_minus_utc());
    }
}
