//! Core plumbing: constants, configuration and the fixed-step clock.

pub mod clock;
pub mod config;
pub mod constants;

pub use clock::FixedClock;
pub use config::{ConfigError, GameConfig};
pub use constants::*;
