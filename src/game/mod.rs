//! Dragon flight simulation.
//!
//! A dragon flaps through scrolling pillar gaps. Gravity pulls it down each
//! tick, the ceiling is soft, and the floor or a pillar ends the run. Each
//! pillar that slips behind the dragon scores one point.

pub mod collision;
pub mod logic;
pub mod obstacles;
pub mod physics;
pub mod snapshot;
pub mod types;

pub use logic::{process_input, tick, TickEvent};
pub use snapshot::{ObstacleView, PlayerView, Snapshot};
pub use types::*;
