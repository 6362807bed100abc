//! Rasterise a [`DisplayList`] onto a character grid.
//!
//! Playfield coordinates are scaled to the cell grid independently on each
//! axis. Later draw calls paint over earlier ones.

use crate::collision::Aabb;
use crate::core::render::{DisplayList, DrawCall, Paint};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

const EDGE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub cols: usize,
    pub rows: usize,
    cells: Vec<Option<Paint>>,
    labels: Vec<(usize, usize, String)>,
}

impl Raster {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
            labels: Vec::new(),
        }
    }

    /// Replay `list` scaled to `cols` x `rows`.
    pub fn render(list: &DisplayList, cols: usize, rows: usize) -> Self {
        let mut raster = Self::new(cols, rows);
        if list.width <= 0.0 || list.height <= 0.0 {
            return raster;
        }
        let sx = cols as f64 / list.width;
        let sy = rows as f64 / list.height;

        for call in &list.calls {
            match call {
                DrawCall::Clear => {
                    raster.cells.fill(None);
                    raster.labels.clear();
                }
                DrawCall::FillRect { rect, paint } => raster.fill_rect(rect, sx, sy, *paint),
                DrawCall::FillCircle {
                    x,
                    y,
                    radius,
                    paint,
                } => raster.fill_circle(*x, *y, *radius, sx, sy, *paint),
                DrawCall::StrokeArc {
                    x,
                    y,
                    radius,
                    start,
                    end,
                    paint,
                } => raster.stroke_arc(*x, *y, *radius, *start, *end, sx, sy, *paint),
                DrawCall::Text { x, y, text } => {
                    if let Some((col, row)) = raster.cell_of(*x * sx, *y * sy) {
                        raster.labels.push((col, row, text.clone()));
                    }
                }
            }
        }
        raster
    }

    pub fn paint_at(&self, col: usize, row: usize) -> Option<Paint> {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    fn cell_of(&self, cx: f64, cy: f64) -> Option<(usize, usize)> {
        if cx < 0.0 || cy < 0.0 || !cx.is_finite() || !cy.is_finite() {
            return None;
        }
        let (col, row) = (cx as usize, cy as usize);
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    fn set(&mut self, col: usize, row: usize, paint: Paint) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = Some(paint);
        }
    }

    /// Cells whose area intersects the rectangle.
    fn fill_rect(&mut self, rect: &Aabb, sx: f64, sy: f64, paint: Paint) {
        // Nudge inward so edges that land on a cell boundary stay exclusive.
        let span = |lo: f64, hi: f64, scale: f64, limit: usize| {
            let first = (lo * scale + EDGE_EPSILON).floor().max(0.0);
            let last = ((hi * scale - EDGE_EPSILON).ceil() - 1.0).min(limit as f64 - 1.0);
            (first as usize, last)
        };
        let (c0, c1) = span(rect.left, rect.right, sx, self.cols);
        let (r0, r1) = span(rect.top, rect.bottom, sy, self.rows);
        if c1 < 0.0 || r1 < 0.0 {
            return;
        }
        for row in r0..=r1 as usize {
            for col in c0..=c1 as usize {
                self.set(col, row, paint);
            }
        }
    }

    /// Cells whose centre lies inside the circle, plus the centre cell.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, sx: f64, sy: f64, paint: Paint) {
        let bounds = Aabb::new(x - radius, y - radius, radius * 2.0, radius * 2.0);
        let c0 = (bounds.left * sx).floor().max(0.0) as usize;
        let r0 = (bounds.top * sy).floor().max(0.0) as usize;
        let c1 = ((bounds.right * sx).ceil().max(0.0) as usize).min(self.cols);
        let r1 = ((bounds.bottom * sy).ceil().max(0.0) as usize).min(self.rows);
        for row in r0..r1 {
            for col in c0..c1 {
                let px = (col as f64 + 0.5) / sx - x;
                let py = (row as f64 + 0.5) / sy - y;
                if px * px + py * py <= radius * radius {
                    self.set(col, row, paint);
                }
            }
        }
        if let Some((col, row)) = self.cell_of(x * sx, y * sy) {
            self.set(col, row, paint);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn stroke_arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
        sx: f64,
        sy: f64,
        paint: Paint,
    ) {
        // About two samples per cell along the arc.
        let cells_around = radius * sx.max(sy);
        let step = if cells_around > 0.0 {
            (0.5 / cells_around).min(0.1)
        } else {
            0.1
        };
        let mut angle = start;
        while angle <= end {
            let (px, py) = (x + radius * angle.cos(), y + radius * angle.sin());
            if let Some((col, row)) = self.cell_of(px * sx, py * sy) {
                self.set(col, row, paint);
            }
            angle += step;
        }
    }

    /// Styled lines for a ratatui `Paragraph`.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut rows: Vec<Vec<(char, Style)>> = (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| match self.paint_at(col, row) {
                        Some(paint) => paint_glyph(paint),
                        None => (' ', Style::default()),
                    })
                    .collect()
            })
            .collect();

        let text_style = paint_glyph(Paint::Text).1;
        for (col, row, text) in &self.labels {
            for (i, ch) in text.chars().enumerate() {
                if let Some(cell) = rows[*row].get_mut(col + i) {
                    *cell = (ch, text_style);
                }
            }
        }

        rows.into_iter()
            .map(|cells| {
                Line::from(
                    cells
                        .into_iter()
                        .map(|(ch, style)| Span::styled(ch.to_string(), style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

/// Glyph and colour for each paint.
pub fn paint_glyph(paint: Paint) -> (char, Style) {
    let (ch, color) = match paint {
        Paint::Snake => ('█', Color::Green),
        Paint::Apple => ('●', Color::Red),
        Paint::Bird => ('●', Color::Yellow),
        Paint::Pipe => ('█', Color::Green),
        Paint::Road => ('░', Color::DarkGray),
        Paint::Car => ('█', Color::Red),
        Paint::Obstacle => ('█', Color::Blue),
        Paint::Ball => ('●', Color::Green),
        Paint::Ring => ('•', Color::Blue),
        Paint::ActiveRing => ('•', Color::Red),
        Paint::Text => (' ', Color::White),
    };
    (ch, Style::default().fg(color))
}
