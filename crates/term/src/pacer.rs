//! Frame pacing: the stand-in for waiting on vertical blank.
//!
//! The simulation has a fixed timestep of one step per refresh. [`PaceClock`]
//! is the pure deadline arithmetic; [`FramePacer`] applies it to the wall clock
//! and sleeps.

use std::thread;
use std::time::{Duration, Instant};

/// Deadline bookkeeping, driven by an externally supplied "now".
#[derive(Debug, Clone)]
pub struct PaceClock {
    interval: Duration,
    deadline: Option<Duration>,
}

impl PaceClock {
    /// `hz` is clamped to at least 1.
    pub fn new(hz: u32) -> Self {
        let hz = hz.max(1);
        Self {
            interval: Duration::from_nanos(1_000_000_000 / hz as u64),
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long to wait from `now` until the next refresh.
    ///
    /// - First call: one full interval.
    /// - On time: the remainder until the deadline; the next deadline is one
    ///   interval later, so pacing does not drift.
    /// - Overrun: no wait, and the schedule restarts from `now` instead of
    ///   trying to catch up.
    pub fn delay(&mut self, now: Duration) -> Duration {
        match self.deadline {
            Some(deadline) if now < deadline => {
                self.deadline = Some(deadline + self.interval);
                deadline - now
            }
            Some(_) => {
                self.deadline = Some(now + self.interval);
                Duration::ZERO
            }
            None => {
                self.deadline = Some(now + self.interval * 2);
                self.interval
            }
        }
    }
}

/// Blocks the caller once per refresh interval.
#[derive(Debug)]
pub struct FramePacer {
    origin: Instant,
    clock: PaceClock,
}

impl FramePacer {
    pub fn new(hz: u32) -> Self {
        Self {
            origin: Instant::now(),
            clock: PaceClock::new(hz),
        }
    }

    pub fn interval(&self) -> Duration {
        self.clock.interval()
    }

    /// Wait for the next refresh. Returns `false` if the frame overran and
    /// no wait happened.
    pub fn wait(&mut self) -> bool {
        let delay = self.clock.delay(self.origin.elapsed());
        if delay.is_zero() {
            return false;
        }
        thread::sleep(delay);
        true
    }
}
