//! Mapping between terminal cells and play-field world units.

use crate::core::config::GameConfig;
use crate::game::{Field, FieldGeometry};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

/// Screen regions of the game view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Whole frame including the outer border.
    pub outer: Rect,
    /// Play field, inside the border.
    pub play: Rect,
    /// Two-line status bar under the play field.
    pub status_bar: Rect,
}

/// Split the terminal area into border, play field and status bar.
///
/// ```text
/// ┌─ Dragonflap ─────────────────────┐
/// │ [play field]                     │
/// │ [status bar - 2 lines]           │
/// └──────────────────────────────────┘
/// ```
pub fn compute_layout(area: Rect) -> GameLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);
    GameLayout {
        outer: area,
        play: chunks[0],
        status_bar: chunks[1],
    }
}

/// Play field geometry derived from the current terminal size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalGeometry {
    pub area: Rect,
    pub units_per_col: f64,
    pub units_per_row: f64,
}

impl TerminalGeometry {
    pub fn new(area: Rect, config: &GameConfig) -> Self {
        Self {
            area,
            units_per_col: config.units_per_column,
            units_per_row: config.units_per_row,
        }
    }

    /// Column offset (relative to the play area) of world x. May be
    /// negative or past the right edge.
    pub fn col_of(&self, x: f64) -> i32 {
        (x / self.units_per_col).floor() as i32
    }

    /// Row offset (relative to the play area) of world y.
    pub fn row_of(&self, y: f64) -> i32 {
        (y / self.units_per_row).floor() as i32
    }

    /// Number of cells spanned by a world-unit width, at least one.
    pub fn cols_for(&self, width: f64) -> i32 {
        ((width / self.units_per_col).round() as i32).max(1)
    }

    /// World y at the vertical centre of a row.
    pub fn row_center_y(&self, row: i32) -> f64 {
        (row as f64 + 0.5) * self.units_per_row
    }
}

impl FieldGeometry for TerminalGeometry {
    fn field(&self) -> Field {
        Field::new(
            self.area.width as f64 * self.units_per_col,
            self.area.height as f64 * self.units_per_row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_border_and_status() {
        let layout = compute_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.play, Rect::new(1, 1, 98, 36));
        assert_eq!(layout.status_bar, Rect::new(1, 37, 98, 2));
    }

    #[test]
    fn test_field_follows_terminal_size() {
        let config = GameConfig::default();
        let geometry = TerminalGeometry::new(Rect::new(1, 1, 120, 30), &config);
        assert_eq!(geometry.field(), Field::new(1920.0, 1080.0));

        let resized = TerminalGeometry::new(Rect::new(1, 1, 80, 20), &config);
        assert_eq!(resized.field(), Field::new(1280.0, 720.0));
    }

    #[test]
    fn test_world_to_cell() {
        let config = GameConfig::default();
        let geometry = TerminalGeometry::new(Rect::new(0, 0, 120, 30), &config);
        assert_eq!(geometry.col_of(0.0), 0);
        assert_eq!(geometry.col_of(31.9), 1);
        assert_eq!(geometry.col_of(-100.0), -7);
        assert_eq!(geometry.row_of(540.0), 15);
        assert_eq!(geometry.cols_for(600.0), 38);
        assert_eq!(geometry.cols_for(1.0), 1);
        assert_eq!(geometry.row_center_y(0), 18.0);
    }
}
