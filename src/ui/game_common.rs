//! Chrome shared by the game and puzzle views: the titled border, the
//! status strip, the side panel and the game-over box.
//!
//! Everything a view shows about its game (title, accent colour, key
//! hints) comes from [`GameKind`], so the menu, the status strip and the
//! side panel always agree.

use crate::games::GameKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the side panel.
pub const PANEL_WIDTH: u16 = 22;
/// Rows under the field: status text plus key hints.
const STATUS_ROWS: u16 = 2;

/// Areas of a game view, inside its border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub field: Rect,
    pub status: Rect,
    pub panel: Rect,
}

/// Split the inside of the border into field, status strip and panel.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │ field                           │ panel       │
/// │ status / key hints              │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn split_view(inner: Rect) -> ViewLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(PANEL_WIDTH)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_ROWS)])
        .split(columns[0]);
    ViewLayout {
        field: rows[0],
        status: rows[1],
        panel: columns[1],
    }
}

pub fn accent(kind: GameKind) -> Color {
    match kind {
        GameKind::Snake => Color::LightGreen,
        GameKind::Flappy => Color::LightYellow,
        GameKind::Racer => Color::LightRed,
        GameKind::Helix => Color::LightBlue,
        GameKind::Puzzle => Color::LightMagenta,
    }
}

/// Clear `area`, draw the titled border for `kind` and split what is inside.
pub fn render_view_frame(frame: &mut Frame, area: Rect, kind: GameKind) -> ViewLayout {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", kind.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent(kind)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    split_view(inner)
}

/// `(key, action)` pairs from a hint string like `"[Space] Jump  [Esc] Menu"`.
pub fn key_hints(controls: &str) -> Vec<(&str, &str)> {
    controls
        .split("  ")
        .filter_map(|hint| {
            let hint = hint.trim();
            let close = hint.find(']')?;
            Some((&hint[..=close], hint[close + 1..].trim()))
        })
        .collect()
}

fn hints_line(controls: &str) -> Line<'_> {
    let mut spans = Vec::new();
    for (i, (key, action)) in key_hints(controls).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Status text on the first row, the game's key hints on the second.
pub fn render_status(frame: &mut Frame, area: Rect, kind: GameKind, text: &str, color: Color) {
    if area.height == 0 {
        return;
    }
    let lines = vec![
        Line::from(Span::styled(text, Style::default().fg(color))),
        hints_line(kind.controls()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// `label: value` row for the side panel.
pub fn stat_line(label: &str, value: impl ToString, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Bordered side panel with `stats` on top and one key hint per row below.
pub fn render_panel(frame: &mut Frame, area: Rect, kind: GameKind, stats: Vec<Line<'static>>) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = stats;
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Controls",
        Style::default().fg(accent(kind)).add_modifier(Modifier::BOLD),
    )));
    for (key, action) in key_hints(kind.controls()) {
        lines.push(Line::from(vec![
            Span::styled(format!(" {key} "), Style::default().fg(Color::White)),
            Span::styled(action.to_string(), Style::default().fg(Color::DarkGray)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Centered game-over box drawn over the field, which stays visible around it.
pub fn render_game_over_overlay(frame: &mut Frame, field: Rect, score: u32) {
    let width = 36u16.min(field.width);
    let height = 7u16.min(field.height);
    let modal = Rect::new(
        field.x + field.width.saturating_sub(width) / 2,
        field.y + field.height.saturating_sub(height) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Game Over! Your score: {score}")),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Restart  [Esc] Menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
