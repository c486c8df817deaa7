use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Issues clock-derived ids (Unix milliseconds) that never repeat, even for
/// creations within the same millisecond or after a clock step backwards.
#[derive(Debug, Default)]
pub struct IdClock {
    last: AtomicI64,
}

impl IdClock {
    pub fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Raises the floor so an already-stored id is never reissued.
    pub fn observe(&self, id: TaskId) {
        self.last.fetch_max(id.value(), Ordering::Relaxed);
    }

    pub fn next(&self) -> TaskId {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return TaskId::new(candidate),
                Err(current) => prev = current,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_strictly_increase() {
        let clock = IdClock::new();
        let first = clock.next();
        let second = clock.next();
        let third = clock.next();
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn observe_raises_the_floor() {
        let clock = IdClock::new();
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        clock.observe(TaskId::new(far_future));
        assert_eq!(clock.next().value(), far_future + 1);
    }

    #[test]
    fn task_id_parses_and_displays() {
        let id: TaskId = "1700000000123".parse().unwrap();
        assert_eq!(id, TaskId::new(1_700_000_000_123));
        assert_eq!(id.to_string(), "1700000000123");
        assert!("abc".parse::<TaskId>().is_err());
    }
}
