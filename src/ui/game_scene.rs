//! Real-time game view: the world's display list rasterised into the
//! playfield, with a status bar and info panel around it.

use super::game_common::{
    render_game_over_overlay, render_panel, render_status, render_view_frame, stat_line,
};
use super::raster::Raster;
use crate::core::render::DisplayList;
use crate::core::session::SessionState;
use crate::games::ActiveGame;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

pub fn render_game_scene(frame: &mut Frame, area: Rect, game: &ActiveGame) {
    let kind = game.kind();
    let layout = render_view_frame(frame, area, kind);

    let field = render_play_field(frame, layout.field, game);

    let session = game.session();
    let (status, color) = match session.state {
        SessionState::Start => ("Press Enter to start".to_string(), Color::Cyan),
        SessionState::Playing => (format!("Score: {}", session.score), Color::White),
        SessionState::GameOver => (format!("Final score: {}", session.score), Color::Red),
    };
    render_status(frame, layout.status, kind, &status, color);
    render_panel(
        frame,
        layout.panel,
        kind,
        vec![
            stat_line("Score", session.score, Color::Yellow),
            stat_line("State", session.state.label(), Color::White),
            stat_line("Run", session.run(), Color::White),
        ],
    );

    match session.state {
        SessionState::Start => render_start_prompt(frame, field),
        SessionState::GameOver => render_game_over_overlay(frame, field, session.score),
        SessionState::Playing => {}
    }
}

/// Largest grid inside `area` that keeps the field's proportions.
fn fit_grid(area: Rect, field: (f64, f64)) -> (u16, u16) {
    let (w, h) = field;
    if area.width == 0 || area.height == 0 || w <= 0.0 || h <= 0.0 {
        return (0, 0);
    }
    let rows = area.height;
    let cols = (rows as f64 * w / h * CELL_ASPECT).round() as u16;
    if cols <= area.width {
        return (cols.max(1), rows);
    }
    let rows = (area.width as f64 * h / w / CELL_ASPECT).round() as u16;
    (area.width, rows.clamp(1, area.height))
}

/// Draws the field centred in `area` and returns the rect it occupies.
fn render_play_field(frame: &mut Frame, area: Rect, game: &ActiveGame) -> Rect {
    let (w, h) = game.field_size();
    let (cols, rows) = fit_grid(area, (w, h));
    let field = Rect::new(
        area.x + area.width.saturating_sub(cols) / 2,
        area.y + area.height.saturating_sub(rows) / 2,
        cols,
        rows,
    );
    if cols == 0 || rows == 0 {
        return field;
    }

    let mut list = DisplayList::new(w, h);
    game.draw(&mut list);
    let raster = Raster::render(&list, cols as usize, rows as usize);
    frame.render_widget(Paragraph::new(raster.lines()), field);
    field
}

fn render_start_prompt(frame: &mut Frame, field: Rect) {
    if field.height == 0 {
        return;
    }
    let prompt = Paragraph::new(Line::from(Span::styled(
        "Press Enter to start",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(
        prompt,
        Rect {
            y: field.y + field.height / 2,
            height: 1,
            ..field
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_grid_height_bound() {
        // 400x600 field in a wide area: all rows, cols from the aspect.
        assert_eq!(fit_grid(Rect::new(0, 0, 100, 30), (400.0, 600.0)), (40, 30));
    }

    #[test]
    fn test_fit_grid_width_bound() {
        // 800x600 snake board in a narrow area.
        assert_eq!(fit_grid(Rect::new(0, 0, 40, 40), (800.0, 600.0)), (40, 15));
    }

    #[test]
    fn test_fit_grid_empty_area() {
        assert_eq!(fit_grid(Rect::new(0, 0, 0, 10), (400.0, 600.0)), (0, 0));
    }
}
