//! Puzzle Mania view: numbers to sort, the typed answer and feedback.

use super::game_common::{render_panel, render_status, render_view_frame, stat_line};
use crate::games::puzzle::{PuzzleMessage, PuzzleScreen};
use crate::games::GameKind;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_puzzle_scene(frame: &mut Frame, area: Rect, screen: &PuzzleScreen) {
    let layout = render_view_frame(frame, area, GameKind::Puzzle);

    let numbers = join(&screen.puzzle.numbers);
    let mut entry = join(&screen.entry);
    for _ in screen.entry.len()..screen.puzzle.numbers.len() {
        if !entry.is_empty() {
            entry.push(' ');
        }
        entry.push('_');
    }

    let mut lines = vec![
        Line::from(""),
        Line::from("Arrange these numbers in ascending order:"),
        Line::from(""),
        Line::from(Span::styled(
            numbers,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(entry, Style::default().fg(Color::White)),
        ]),
        Line::from(""),
    ];
    if let Some(message) = screen.message {
        let color = match message {
            PuzzleMessage::Solved => Color::Green,
            PuzzleMessage::Wrong => Color::Red,
        };
        lines.push(Line::from(Span::styled(
            message.text(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        layout.field,
    );

    render_status(
        frame,
        layout.status,
        GameKind::Puzzle,
        "Type the numbers, then check",
        Color::White,
    );
    render_panel(
        frame,
        layout.panel,
        GameKind::Puzzle,
        vec![
            stat_line("Solved", screen.solved, Color::Green),
            stat_line("Attempts", screen.attempts, Color::White),
        ],
    );
}

fn join(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
