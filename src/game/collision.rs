//! Pass detection and the lenient player/obstacle overlap test.

use super::types::{Obstacle, Player};
use crate::core::config::GameConfig;

/// Mark `obstacle` passed once its leading edge is behind the player.
///
/// Returns the score increment: 1 on the tick the flag flips, 0 otherwise.
pub fn check_pass(obstacle: &mut Obstacle, player: &Player) -> u32 {
    if !obstacle.passed && obstacle.x < player.x {
        obstacle.passed = true;
        1
    } else {
        0
    }
}

/// Lenient box test between the player and one obstacle.
///
/// The horizontal buffer narrows the pillar (the player must be well inside
/// it before anything counts); the vertical buffer widens the gap.
pub fn check_collision(obstacle: &Obstacle, player: &Player, config: &GameConfig) -> bool {
    let pipe_left = obstacle.x;
    let pipe_right = obstacle.x + config.obstacle_width;
    let gap_top = obstacle.gap_top(config.gap_height);
    let gap_bottom = obstacle.gap_bottom(config.gap_height);
    let h_buf = config.collision_h_buffer;
    let v_buf = config.collision_v_buffer;

    if player.right() < pipe_left + h_buf || player.left() > pipe_right - h_buf {
        return false;
    }

    player.top() < gap_top - v_buf || player.bottom() > gap_bottom + v_buf
}
