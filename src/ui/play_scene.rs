//! Terminal rendering of a game snapshot.

use super::geometry::{GameLayout, TerminalGeometry};
use crate::assets::{AssetId, AssetSet, Sprite};
use crate::game::{AnimationFrame, GameState, Snapshot};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const EMPTY: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

/// Fixed-size character canvas the scene is composed into before it is
/// handed to ratatui.
struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    fn set(&mut self, col: i32, row: i32, ch: char, color: Color) {
        if col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height {
            self.cells[row as usize * self.width + col as usize] = Cell { ch, color };
        }
    }

    /// Draw a sprite with its top-left at (`col`, `row`). Spaces are
    /// transparent.
    fn blit(&mut self, sprite: &Sprite, col: i32, row: i32, color: Color) {
        for (dy, line) in sprite.lines.iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch != ' ' {
                    self.set(col + dx as i32, row + dy as i32, ch, color);
                }
            }
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|c| Span::styled(c.ch.to_string(), Style::default().fg(c.color)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

/// Render the whole game view: border, play field, overlays, status bar.
pub fn render_game(
    frame: &mut Frame,
    layout: &GameLayout,
    geometry: &TerminalGeometry,
    snapshot: &Snapshot,
    assets: &AssetSet,
    paused: bool,
) {
    frame.render_widget(Clear, layout.outer);
    let block = Block::default()
        .title(" Dragonflap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    frame.render_widget(block, layout.outer);

    match snapshot.state {
        GameState::Start => {
            render_card(
                frame,
                layout.play,
                assets.get(AssetId::Start),
                Color::Yellow,
                &[],
            );
        }
        GameState::Playing | GameState::GameOver => {
            render_play_field(frame, layout.play, geometry, snapshot, assets);
            render_score(frame, layout.play, snapshot.score);
            if snapshot.state == GameState::GameOver {
                let final_score = format!("Final Score: {}", snapshot.score);
                render_card(
                    frame,
                    layout.play,
                    assets.get(AssetId::End),
                    Color::LightRed,
                    &[final_score.as_str()],
                );
            }
        }
    }

    render_status_bar(frame, layout.status_bar, snapshot, paused);
}

fn render_play_field(
    frame: &mut Frame,
    area: Rect,
    geometry: &TerminalGeometry,
    snapshot: &Snapshot,
    assets: &AssetSet,
) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }
    let mut grid = CellGrid::new(width, height);

    // Background tiles across the whole field
    let background = assets.get(AssetId::Background);
    for row in 0..height {
        for col in 0..width {
            if let Some(ch) = background.glyph(col % background.width, row % background.height) {
                grid.set(col as i32, row as i32, ch, Color::DarkGray);
            }
        }
    }

    // Pillars above and below each gap
    let pillar = assets.get(AssetId::Pillar);
    for obstacle in &snapshot.obstacles {
        let (gap_top, gap_bottom) = snapshot.gap_bounds(obstacle);
        let left = geometry.col_of(obstacle.x);
        let cols = geometry.cols_for(snapshot.obstacle_width);
        for row in 0..height as i32 {
            let y = geometry.row_center_y(row);
            if y >= gap_top && y <= gap_bottom {
                continue;
            }
            for dx in 0..cols {
                let ch = pillar
                    .glyph(dx as usize % pillar.width, row as usize % pillar.height)
                    .unwrap_or('█');
                grid.set(left + dx, row, ch, Color::Green);
            }
        }
    }

    let player = &snapshot.player;
    let dragon = match player.frame {
        AnimationFrame::WingsUp => assets.get(AssetId::DragonUp),
        AnimationFrame::WingsDown => assets.get(AssetId::DragonDown),
    };
    grid.blit(
        dragon,
        geometry.col_of(player.x),
        geometry.row_of(player.y),
        Color::LightRed,
    );

    frame.render_widget(Paragraph::new(grid.into_lines()), area);
}

fn render_score(frame: &mut Frame, area: Rect, score: u32) {
    if area.height == 0 {
        return;
    }
    let text = Paragraph::new(Line::from(Span::styled(
        format!(" Score: {} ", score),
        Style::default()
            .fg(Color::Yellow)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(text, Rect { height: 1, ..area });
}

/// Centre a title-card sprite in `area` with optional caption lines below.
fn render_card(frame: &mut Frame, area: Rect, sprite: &Sprite, color: Color, captions: &[&str]) {
    let caption_height = if captions.is_empty() {
        0
    } else {
        1 + captions.len() as u16
    };
    let content_height = (sprite.height as u16 + caption_height).min(area.height);
    let y_offset = area.y + area.height.saturating_sub(content_height) / 2;
    let card = Rect::new(area.x, y_offset, area.width, content_height);
    frame.render_widget(Clear, card);

    let mut lines: Vec<Line> = sprite
        .lines
        .iter()
        .map(|l| {
            // pad so every art line centres on the same column
            let padded = format!("{:<width$}", l, width = sprite.width);
            Line::from(Span::styled(
                padded,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    if !captions.is_empty() {
        lines.push(Line::from(""));
        for caption in captions {
            lines.push(Line::from(Span::styled(
                caption.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), card);
}

fn render_status_bar(frame: &mut Frame, area: Rect, snapshot: &Snapshot, paused: bool) {
    let (status, color, controls) = if paused {
        (
            "Paused".to_string(),
            Color::Cyan,
            vec![("[P]", "Resume"), ("[Esc]", "Quit")],
        )
    } else {
        match snapshot.state {
            GameState::Start => (
                "Press Enter to take flight!".to_string(),
                Color::Yellow,
                vec![("[Enter]", "Begin"), ("[Esc]", "Quit")],
            ),
            GameState::Playing => (
                format!("Score: {}", snapshot.score),
                Color::Green,
                vec![("[Space/Up]", "Flap"), ("[P]", "Pause"), ("[Esc]", "Quit")],
            ),
            GameState::GameOver => (
                format!("Crashed with {} points", snapshot.score),
                Color::Red,
                vec![("[Enter/R]", "Play again"), ("[Esc]", "Quit")],
            ),
        }
    };
    super::render_status_bar(frame, area, &status, color, &controls);
}
