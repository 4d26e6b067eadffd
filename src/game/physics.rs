//! Vertical physics for the dragon: gravity, flap impulse and the
//! ceiling/floor boundaries.

use super::types::{Field, Player};
use crate::core::config::GameConfig;

/// Outcome of checking the player against the field edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Clear,
    /// Hit the ceiling; position clamped, not fatal.
    Ceiling,
    /// Fell through the floor; fatal.
    Floor,
}

/// One tick of gravity: accelerate, clamp to terminal velocity, integrate.
pub fn apply_gravity(player: &mut Player, config: &GameConfig) {
    player.velocity += config.gravity;
    if player.velocity > config.terminal_velocity {
        player.velocity = config.terminal_velocity;
    }
    player.y += player.velocity;
}

/// Overwrite velocity with the flap impulse and flip the wing sprite.
pub fn apply_flap(player: &mut Player, config: &GameConfig) {
    player.velocity = config.flap_impulse;
    player.frame = player.frame.toggled();
}

/// Clamp against the ceiling or report a floor breach.
pub fn resolve_boundaries(player: &mut Player, field: Field) -> Boundary {
    if player.y < 0.0 {
        player.y = 0.0;
        player.velocity = 0.0;
        Boundary::Ceiling
    } else if player.bottom() > field.height {
        Boundary::Floor
    } else {
        Boundary::Clear
    }
}

/// Gravity followed by boundary resolution.
pub fn step_player(player: &mut Player, field: Field, config: &GameConfig) -> Boundary {
    apply_gravity(player, config);
    resolve_boundaries(player, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::AnimationFrame;

    fn player() -> (Player, GameConfig, Field) {
        let config = GameConfig::default();
        let field = Field::new(1600.0, 900.0);
        (Player::new(field, &config), config, field)
    }

    #[test]
    fn test_gravity_accelerates_downward() {
        let (mut p, config, _) = player();
        let y0 = p.y;
        apply_gravity(&mut p, &config);
        assert!((p.velocity - 0.05).abs() < 1e-12);
        assert!((p.y - (y0 + 0.05)).abs() < 1e-12);
    }

    #[test]
    fn test_terminal_velocity_clamp() {
        let (mut p, config, _) = player();
        p.velocity = 4.99;
        apply_gravity(&mut p, &config);
        assert_eq!(p.velocity, 5.0);
        p.velocity = 100.0;
        apply_gravity(&mut p, &config);
        assert_eq!(p.velocity, 5.0);
    }

    #[test]
    fn test_flap_overwrites_instead_of_accumulating() {
        let (mut p, config, _) = player();
        p.velocity = 3.0;
        apply_flap(&mut p, &config);
        assert_eq!(p.velocity, -4.0);
        apply_flap(&mut p, &config);
        assert_eq!(p.velocity, -4.0);
    }

    #[test]
    fn test_flap_toggles_frame() {
        let (mut p, config, _) = player();
        apply_flap(&mut p, &config);
        assert_eq!(p.frame, AnimationFrame::WingsDown);
        apply_flap(&mut p, &config);
        assert_eq!(p.frame, AnimationFrame::WingsUp);
    }

    #[test]
    fn test_ceiling_clamps_and_stops() {
        let (mut p, config, field) = player();
        p.y = 2.0;
        p.velocity = -4.0;
        let boundary = step_player(&mut p, field, &config);
        assert_eq!(boundary, Boundary::Ceiling);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.velocity, 0.0);
    }

    #[test]
    fn test_floor_is_fatal() {
        let (mut p, config, field) = player();
        p.y = field.height - p.height - 0.01;
        p.velocity = 1.0;
        assert_eq!(step_player(&mut p, field, &config), Boundary::Floor);
    }

    #[test]
    fn test_touching_floor_exactly_is_clear() {
        let (mut p, _, field) = player();
        p.y = field.height - p.height;
        assert_eq!(resolve_boundaries(&mut p, field), Boundary::Clear);
    }
}
