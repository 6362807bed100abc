//! Home menu: the list of games with the selected entry's description.

use crate::build_info;
use crate::games::GameKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render_menu(frame: &mut Frame, area: Rect, selected: usize) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Minigames ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(GameKind::ALL.len() as u16 + 1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let items: Vec<ListItem> = GameKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let prefix = if i == selected { "> " } else { "  " };
            let style = if i == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", prefix, kind.title())).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), chunks[0]);

    let kind = GameKind::from_index(selected);
    let detail = vec![
        Line::from(Span::styled(
            kind.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(kind.description()),
        Line::from(""),
        Line::from(Span::styled(
            kind.controls(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(detail).wrap(Wrap { trim: true }),
        chunks[1],
    );

    let help = Line::from(vec![
        Span::styled("[Up/Down]", Style::default().fg(Color::White)),
        Span::styled(" Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Enter]", Style::default().fg(Color::White)),
        Span::styled(" Play  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Q]", Style::default().fg(Color::White)),
        Span::styled(" Quit  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            build_info::version_line(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(help), chunks[2]);
}
