//! Dragon flight data structures.
//!
//! All coordinates are world units with the origin at the top-left of the
//! play field; y grows downward, so negative velocity is upward.

use crate::core::config::GameConfig;
use crate::core::constants::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
use serde::{Deserialize, Serialize};

/// Play-field dimensions, re-read from the geometry provider every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f64,
    pub height: f64,
}

impl Field {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

/// Source of the current play-field size.
pub trait FieldGeometry {
    fn field(&self) -> Field;
}

impl FieldGeometry for Field {
    fn field(&self) -> Field {
        *self
    }
}

/// Which of the two dragon sprites to show. Flips on every flap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationFrame {
    #[default]
    WingsUp,
    WingsDown,
}

impl AnimationFrame {
    pub fn toggled(self) -> Self {
        match self {
            Self::WingsUp => Self::WingsDown,
            Self::WingsDown => Self::WingsUp,
        }
    }
}

/// The player-controlled dragon.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Left edge. Fixed for the length of a run.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
    pub frame: AnimationFrame,
}

impl Player {
    /// A dragon at rest, a quarter of the way across and vertically centred.
    pub fn new(field: Field, config: &GameConfig) -> Self {
        Self {
            x: field.width * config.player_x_fraction,
            y: field.height / 2.0,
            velocity: 0.0,
            width: config.player_width,
            height: config.player_height,
            frame: AnimationFrame::default(),
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A pillar pair with a passable gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Leading (left) edge; decreases every tick.
    pub x: f64,
    /// Vertical midpoint of the gap, fixed at spawn.
    pub gap_center: f64,
    /// Set once the obstacle's leading edge is behind the player.
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_center: f64) -> Self {
        Self {
            x,
            gap_center,
            passed: false,
        }
    }

    pub fn gap_top(&self, gap_height: f64) -> f64 {
        self.gap_center - gap_height / 2.0
    }

    pub fn gap_bottom(&self, gap_height: f64) -> f64 {
        self.gap_center + gap_height / 2.0
    }
}

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Idle on the title screen, waiting for Begin.
    #[default]
    Start,
    /// Simulation running.
    Playing,
    /// Simulation frozen after a crash, waiting for Reset.
    GameOver,
}

/// Logical input events, already decoupled from physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Flap,
    Begin,
    Reset,
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Floor,
    Obstacle,
}

/// Everything one run owns. Only the functions in `game::logic` mutate it.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: GameState,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Logical time of the most recent spawn (or of the run start).
    pub last_spawn_ms: u64,
    /// Logical time of the most recent tick.
    pub now_ms: u64,
    /// Field used by the most recent tick.
    pub field: Field,
    /// Ticks simulated while Playing in the current run.
    pub tick_count: u64,
    pub config: GameConfig,
}

impl GameSession {
    pub fn new(config: GameConfig, field: Field) -> Self {
        Self {
            state: GameState::Start,
            player: Player::new(field, &config),
            obstacles: Vec::new(),
            score: 0,
            last_spawn_ms: 0,
            now_ms: 0,
            field,
            tick_count: 0,
            config,
        }
    }

    /// Put the run back to its opening position against the current field.
    ///
    /// The spawn timer restarts at `now_ms`, so the first obstacle of a run
    /// appears one full spawn interval after it starts.
    pub fn restart_run(&mut self, now_ms: u64) {
        self.player = Player::new(self.field, &self.config);
        self.obstacles.clear();
        self.score = 0;
        self.last_spawn_ms = now_ms;
        self.tick_count = 0;
    }
}
