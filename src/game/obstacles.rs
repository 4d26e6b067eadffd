//! Obstacle spawning, scrolling and culling.

use super::types::{Field, Obstacle};
use crate::core::config::GameConfig;
use rand::Rng;

/// True once a full spawn interval has elapsed since the last spawn.
pub fn spawn_due(now_ms: u64, last_spawn_ms: u64, interval_ms: u64) -> bool {
    now_ms.saturating_sub(last_spawn_ms) >= interval_ms
}

/// Inclusive range the gap centre is drawn from for the given field.
///
/// When the field is too short to honour the margin on both sides the range
/// collapses to the vertical midpoint.
pub fn gap_center_range(field: Field, config: &GameConfig) -> (f64, f64) {
    let low = config.gap_margin;
    let high = field.height - config.gap_margin;
    if high < low {
        let mid = field.height / 2.0;
        (mid, mid)
    } else {
        (low, high)
    }
}

/// Spawn a new obstacle at the right edge if one is due.
///
/// Returns the new obstacle's gap centre when it spawned.
pub fn maybe_spawn<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    last_spawn_ms: &mut u64,
    now_ms: u64,
    field: Field,
    config: &GameConfig,
    rng: &mut R,
) -> Option<f64> {
    if !spawn_due(now_ms, *last_spawn_ms, config.spawn_interval_ms) {
        return None;
    }

    let (low, high) = gap_center_range(field, config);
    let gap_center = if high > low {
        rng.gen_range(low..=high)
    } else {
        low
    };

    obstacles.push(Obstacle::new(field.width, gap_center));
    *last_spawn_ms = now_ms;
    Some(gap_center)
}

/// Scroll every obstacle left by `speed` and drop those past `despawn_x`.
///
/// Returns how many were removed.
pub fn advance(obstacles: &mut Vec<Obstacle>, speed: f64, despawn_x: f64) -> usize {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
    let before = obstacles.len();
    obstacles.retain(|o| o.x >= despawn_x);
    before - obstacles.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_due_boundary() {
        assert!(!spawn_due(1_999, 0, 2_000));
        assert!(spawn_due(2_000, 0, 2_000));
        assert!(spawn_due(5_000, 1_000, 2_000));
        // last spawn recorded after now never underflows
        assert!(!spawn_due(10, 500, 2_000));
    }

    #[test]
    fn test_spawn_at_right_edge_within_margin() {
        let config = GameConfig::default();
        let field = Field::new(1920.0, 1080.0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut obstacles = Vec::new();
        let mut last = 0;

        for i in 1..=50u64 {
            let now = i * config.spawn_interval_ms;
            let gap = maybe_spawn(&mut obstacles, &mut last, now, field, &config, &mut rng);
            let gap = gap.expect("interval elapsed, should spawn");
            assert!((150.0..=930.0).contains(&gap));
            assert_eq!(last, now);
        }
        assert_eq!(obstacles.len(), 50);
        assert!(obstacles.iter().all(|o| o.x == 1920.0 && !o.passed));
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut obstacles = Vec::new();
        let mut last = 1_000;
        let spawned = maybe_spawn(
            &mut obstacles,
            &mut last,
            2_500,
            Field::default(),
            &config,
            &mut rng,
        );
        assert!(spawned.is_none());
        assert!(obstacles.is_empty());
        assert_eq!(last, 1_000);
    }

    #[test]
    fn test_short_field_uses_midpoint() {
        let config = GameConfig::default();
        let field = Field::new(800.0, 200.0);
        assert_eq!(gap_center_range(field, &config), (100.0, 100.0));

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut obstacles = Vec::new();
        let mut last = 0;
        let gap = maybe_spawn(&mut obstacles, &mut last, 2_000, field, &config, &mut rng);
        assert_eq!(gap, Some(100.0));
    }

    #[test]
    fn test_advance_scrolls_and_culls_in_order() {
        let mut obstacles = vec![
            Obstacle::new(-98.0, 300.0),
            Obstacle::new(-96.0, 310.0),
            Obstacle::new(-99.0, 320.0),
            Obstacle::new(500.0, 330.0),
        ];
        let removed = advance(&mut obstacles, 3.0, -100.0);

        // -101 and -102 go; -99 survives; adjacent removals are not skipped
        assert_eq!(removed, 2);
        let xs: Vec<f64> = obstacles.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![-99.0, 497.0]);
        let gaps: Vec<f64> = obstacles.iter().map(|o| o.gap_center).collect();
        assert_eq!(gaps, vec![310.0, 330.0]);
    }
}
