//! Monotonic, clock-derived task id generation.
//!
//! # Invariants
//! - Every id handed out is strictly greater than the previous one and
//!   than every id passed to [`IdGenerator::observe`].
//! - Once `i64::MAX` has been observed or handed out, no further ids exist.
//! - Ids track wall-clock milliseconds while the clock moves forward.

use crate::model::task::TaskId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" in epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
            })
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64,
{
    fn now_millis(&self) -> i64 {
        self()
    }
}

pub struct IdGenerator {
    clock: Box<dyn Clock>,
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock, last: None }
    }

    pub fn system() -> Self {
        Self::new(Box::new(SystemClock))
    }

    /// Raises the floor so later ids never collide with `id`.
    pub fn observe(&mut self, id: TaskId) {
        let raw = id.get();
        if self.last.map_or(true, |last| raw > last) {
            self.last = Some(raw);
        }
    }

    /// Returns `max(now, last + 1)`, or `None` once `i64::MAX` is taken.
    pub fn next_id(&mut self) -> Option<TaskId> {
        let now = self.clock.now_millis();
        let next = match self.last {
            Some(last) if now <= last => last.checked_add(1)?,
            _ => now,
        };
        self.last = Some(next);
        Some(TaskId::new(next))
    }
}
