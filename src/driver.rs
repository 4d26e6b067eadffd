//! Fixed-cadence driver: owns the session, the logical clock and the
//! pending input queue, and runs the pause/quit lifecycle.
//!
//! The terminal loop in `main.rs` only feeds it key actions, elapsed time and
//! the current field geometry, then renders [`Driver::snapshot`].

use crate::core::clock::FixedClock;
use crate::core::config::GameConfig;
use crate::game::{tick, CrashCause, FieldGeometry, GameInput, GameSession, Snapshot, TickEvent};
use crate::input::{DriverCommand, InputAction};
use rand::Rng;
use std::time::Duration;

pub struct Driver<R: Rng> {
    clock: FixedClock,
    session: GameSession,
    rng: R,
    pending: Vec<GameInput>,
    /// Set while the play field cannot be shown.
    suspended: bool,
    quit: bool,
}

impl<R: Rng> Driver<R> {
    pub fn new(config: GameConfig, geometry: &impl FieldGeometry, rng: R) -> Self {
        let clock = FixedClock::new(config.tick_interval_ms);
        let session = GameSession::new(config, geometry.field());
        Self {
            clock,
            session,
            rng,
            pending: Vec::new(),
            suspended: false,
            quit: false,
        }
    }

    /// Queue a game input for the next tick, or act on a driver command.
    /// Game inputs arriving while paused or suspended are dropped.
    pub fn handle(&mut self, action: InputAction) {
        match action {
            InputAction::Game(input) => {
                if !self.clock.is_paused() && !self.suspended {
                    self.pending.push(input);
                }
            }
            InputAction::Driver(DriverCommand::TogglePause) => {
                let paused = self.clock.toggle_pause();
                self.pending.clear();
                log::info!("{}", if paused { "paused" } else { "resumed" });
            }
            InputAction::Driver(DriverCommand::Quit) => {
                self.quit = true;
            }
        }
    }

    /// Stop or resume the simulation while the field cannot be shown.
    ///
    /// Suspending drops queued inputs. While suspended, frames run no ticks
    /// and their elapsed time is discarded.
    pub fn set_suspended(&mut self, suspended: bool) {
        if suspended != self.suspended {
            log::info!("{}", if suspended { "suspended" } else { "unsuspended" });
        }
        if suspended {
            self.pending.clear();
        }
        self.suspended = suspended;
    }

    /// Advance by `elapsed` real time, running every tick that is due.
    ///
    /// Pending inputs go to the first tick that runs; if none is due they
    /// wait for the next frame.
    pub fn frame(&mut self, elapsed: Duration, geometry: &impl FieldGeometry) -> Vec<TickEvent> {
        if self.suspended {
            return Vec::new();
        }
        let due = self.clock.advance(elapsed);
        let mut events = Vec::new();
        for _ in 0..due {
            let now = self.clock.step();
            let field = geometry.field();
            let tick_events = tick(&mut self.session, now, field, &self.pending, &mut self.rng);
            self.pending.clear();
            for event in &tick_events {
                log_event(event);
            }
            events.extend(tick_events);
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn ticks(&self) -> u64 {
        self.clock.ticks()
    }
}

fn log_event(event: &TickEvent) {
    match event {
        TickEvent::Began => log::info!("run started"),
        TickEvent::Reset => log::info!("run reset"),
        TickEvent::Crashed { cause, score } => {
            let what = match cause {
                CrashCause::Floor => "floor",
                CrashCause::Obstacle => "pillar",
            };
            log::info!("crashed into the {} with score {}", what, score);
        }
        TickEvent::Passed { score } => log::debug!("pillar passed, score {}", score),
        TickEvent::Spawned { gap_center } => {
            log::debug!("pillar spawned, gap at {:.1}", gap_center)
        }
        TickEvent::Flapped => log::trace!("flap"),
    }
}
