//! Play clock - elapsed game time excluding pauses.
//!
//! Every method takes the current `Instant` from the caller, so the clock
//! never samples time on its own and is deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayClock {
    started_at: Option<Instant>,
    paused_at: Option<Instant>,
    paused_total: Duration,
    stopped_at: Option<Instant>,
}

impl PlayClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset and start counting from `now`
    pub fn start(&mut self, now: Instant) {
        *self = Self {
            started_at: Some(now),
            ..Self::default()
        };
    }

    pub fn pause(&mut self, now: Instant) {
        if self.is_running() {
            self.paused_at = Some(now);
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if self.stopped_at.is_some() {
            return;
        }
        if let Some(at) = self.paused_at.take() {
            self.paused_total += now.saturating_duration_since(at);
        }
    }

    /// Freeze the clock for good (game over). A pending pause ends the count
    /// where the pause began.
    pub fn stop(&mut self, now: Instant) {
        if self.started_at.is_none() || self.stopped_at.is_some() {
            return;
        }
        self.stopped_at = Some(self.paused_at.take().unwrap_or(now));
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.paused_at.is_none() && self.stopped_at.is_none()
    }

    /// Play time up to `now`, pauses excluded
    pub fn elapsed(&self, now: Instant) -> Duration {
        let Some(start) = self.started_at else {
            return Duration::ZERO;
        };
        let end = self.stopped_at.or(self.paused_at).unwrap_or(now);
        end.saturating_duration_since(start)
            .saturating_sub(self.paused_total)
    }
}

/// Split a duration into whole minutes and the remaining seconds
pub fn minutes_seconds(d: Duration) -> (u64, u64) {
    let secs = d.as_secs();
    (secs / 60, secs % 60)
}
