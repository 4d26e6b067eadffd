//! Dragonflap - a terminal arcade game about a dragon threading pillar gaps.
//!
//! The library holds the simulation core, assets, configuration and the
//! fixed-step driver. The binary wires them to a crossterm terminal.

pub mod assets;
pub mod build_info;
pub mod core;
pub mod driver;
pub mod game;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::config::GameConfig;
pub use crate::core::constants::*;
pub use driver::Driver;
pub use game::{GameInput, GameSession, GameState, Snapshot, TickEvent};
