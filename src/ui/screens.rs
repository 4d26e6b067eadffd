//! Full-screen messages shown outside of gameplay: loading, load failure,
//! and terminal too small.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 16;

pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_COLS || area.height < MIN_ROWS
}

/// Loading screen with a braille spinner (100ms per frame).
pub fn render_loading(frame: &mut Frame, elapsed: Duration) {
    const SPINNER: [char; 10] = [
        '⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏',
    ];
    let spinner = SPINNER[(elapsed.as_millis() / 100) as usize % SPINNER.len()];

    let area = frame.size();
    frame.render_widget(Clear, area);
    let lines = vec![Line::from(Span::styled(
        format!("{} Loading assets...", spinner),
        Style::default().fg(Color::Yellow),
    ))];
    render_centered(frame, area, lines);
}

/// Terminal startup failure. The game never gets past this screen.
pub fn render_load_failed(frame: &mut Frame, message: &str) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Startup failed ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "Failed to load assets",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Check the assets directory and restart. [Press any key]",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let content_height = (lines.len() as u16 + 2).min(inner.height);
    let y_offset = inner.y + inner.height.saturating_sub(content_height) / 2;
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        Rect::new(inner.x, y_offset, inner.width, content_height),
    );
}

/// Shown instead of the game while the terminal is below the minimum size.
pub fn render_too_small(frame: &mut Frame) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                MIN_COLS, MIN_ROWS, area.width, area.height
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_centered(frame, area, lines);
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let content_height = (lines.len() as u16).min(area.height);
    let y_offset = area.y + area.height.saturating_sub(content_height) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(area.x, y_offset, area.width, content_height),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_threshold() {
        assert!(is_too_small(Rect::new(0, 0, 39, 40)));
        assert!(is_too_small(Rect::new(0, 0, 120, 15)));
        assert!(!is_too_small(Rect::new(0, 0, 40, 16)));
    }
}
