//! Read-only view of a session handed to renderers once per frame.

use super::types::{AnimationFrame, Field, GameSession, GameState};

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub frame: AnimationFrame,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub x: f64,
    pub gap_center: f64,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: GameState,
    pub score: u32,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub gap_height: f64,
    pub obstacle_width: f64,
    pub field: Field,
}

impl Snapshot {
    /// Top and bottom of an obstacle's gap.
    pub fn gap_bounds(&self, obstacle: &ObstacleView) -> (f64, f64) {
        let half = self.gap_height / 2.0;
        (obstacle.gap_center - half, obstacle.gap_center + half)
    }
}

impl GameSession {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            score: self.score,
            player: PlayerView {
                x: self.player.x,
                y: self.player.y,
                width: self.player.width,
                height: self.player.height,
                frame: self.player.frame,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    gap_center: o.gap_center,
                    passed: o.passed,
                })
                .collect(),
            gap_height: self.config.gap_height,
            obstacle_width: self.config.obstacle_width,
            field: self.field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::game::types::Obstacle;

    #[test]
    fn test_snapshot_mirrors_session() {
        let mut session = GameSession::new(GameConfig::default(), Field::new(1600.0, 900.0));
        session.score = 3;
        session.obstacles.push(Obstacle::new(1200.0, 400.0));

        let snap = session.snapshot();
        assert_eq!(snap.state, GameState::Start);
        assert_eq!(snap.score, 3);
        assert_eq!(snap.player.x, 400.0);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacle_width, 600.0);
        assert_eq!(snap.gap_bounds(&snap.obstacles[0]), (250.0, 550.0));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut session = GameSession::new(GameConfig::default(), Field::default());
        let snap = session.snapshot();
        session.obstacles.push(Obstacle::new(10.0, 10.0));
        session.player.y = 0.0;
        assert!(snap.obstacles.is_empty());
        assert_ne!(snap.player.y, 0.0);
    }
}
