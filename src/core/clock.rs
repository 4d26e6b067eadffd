//! Fixed-cadence logical clock for the driver loop.
//!
//! Real elapsed time is accumulated and converted into whole simulation
//! ticks. The logical time handed to the simulation only moves when a tick
//! runs, so physics and spawn cadence do not depend on the frame rate.

use super::constants::MAX_FRAME_CATCHUP_MS;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FixedClock {
    tick_ms: u64,
    /// Real time not yet spent on a tick, kept at full precision.
    accumulated: Duration,
    now_ms: u64,
    ticks: u64,
    paused: bool,
}

impl FixedClock {
    pub fn new(tick_ms: u64) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            accumulated: Duration::ZERO,
            now_ms: 0,
            ticks: 0,
            paused: false,
        }
    }

    /// Feed real elapsed time and return how many ticks are now due.
    ///
    /// `dt` is clamped so a stall (suspend, debugger) does not replay
    /// seconds of simulation at once. Time is discarded while paused.
    /// Sub-tick remainders carry over to the next call.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.paused {
            return 0;
        }
        self.accumulated += dt.min(Duration::from_millis(MAX_FRAME_CATCHUP_MS));
        let tick = Duration::from_millis(self.tick_ms);
        let mut due = 0;
        while self.accumulated >= tick {
            self.accumulated -= tick;
            due += 1;
        }
        due
    }

    /// Consume one tick, returning the logical time it runs at.
    pub fn step(&mut self) -> u64 {
        self.ticks += 1;
        self.now_ms += self.tick_ms;
        self.now_ms
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.accumulated = Duration::ZERO;
        self.paused
    }
}
