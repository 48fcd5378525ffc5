//! Tick scheduling - a single-shot deadline re-armed after every tick
//!
//! The session's speed changes on level-up, so a fixed repeating interval does
//! not work. Instead the loop arms one deadline, fires it once, and re-arms it
//! with whatever the current speed is. There is never more than one pending
//! tick. Time is always passed in so the scheduler stays deterministic.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    deadline: Option<Instant>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedule the next tick `interval_ms` after `now`, replacing any pending one
    pub fn arm(&mut self, now: Instant, interval_ms: u32) {
        self.deadline = Some(now + Duration::from_millis(interval_ms as u64));
    }

    /// Drop the pending tick, if any
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire the pending tick if it is due. Firing disarms the scheduler.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// How long the caller may block waiting for input
    ///
    /// `None` when nothing is scheduled.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|at| at.saturating_duration_since(now))
    }

    /// Match the scheduler to the session: armed while playing, idle otherwise
    ///
    /// An already pending tick is left alone, so calling this every frame does
    /// not push the deadline back.
    pub fn sync(&mut self, now: Instant, playing: bool, interval_ms: u32) {
        if !playing {
            self.disarm();
        } else if self.deadline.is_none() {
            self.arm(now, interval_ms);
        }
    }
}
