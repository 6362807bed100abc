//! Render surface contract.
//!
//! Worlds describe their geometry as draw calls in playfield coordinates
//! (origin top-left, y grows downward). Nothing is ever read back from the
//! surface. The terminal front end replays a [`DisplayList`] into a canvas.

use crate::collision::Aabb;

/// Colour names used by the games; the front end maps them to real colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Snake,
    Apple,
    Bird,
    Pipe,
    Road,
    Car,
    Obstacle,
    Ball,
    Ring,
    ActiveRing,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    FillRect {
        rect: Aabb,
        paint: Paint,
    },
    FillCircle {
        x: f64,
        y: f64,
        radius: f64,
        paint: Paint,
    },
    /// Arc from `start` to `end` radians, clockwise in screen space.
    StrokeArc {
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
        paint: Paint,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
    },
}

/// A 2D drawable surface.
pub trait RenderSurface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Aabb, paint: Paint);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: Paint);
    fn stroke_arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, paint: Paint);
    fn text(&mut self, x: f64, y: f64, text: &str);
}

/// Recorded frame: the draw calls of exactly one fully-updated tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub width: f64,
    pub height: f64,
    pub calls: Vec<DrawCall>,
}

impl DisplayList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Count of calls painted with `paint`, handy for assertions.
    pub fn count_paint(&self, paint: Paint) -> usize {
        self.calls
            .iter()
            .filter(|call| match call {
                DrawCall::FillRect { paint: p, .. }
                | DrawCall::FillCircle { paint: p, .. }
                | DrawCall::StrokeArc { paint: p, .. } => *p == paint,
                DrawCall::Clear | DrawCall::Text { .. } => false,
            })
            .count()
    }
}

impl RenderSurface for DisplayList {
    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, rect: Aabb, paint: Paint) {
        // Zero-area rectangles are dropped rather than emitted as invalid calls.
        if rect.width() > 0.0 && rect.height() > 0.0 {
            self.calls.push(DrawCall::FillRect { rect, paint });
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: Paint) {
        if radius > 0.0 {
            self.calls.push(DrawCall::FillCircle {
                x,
                y,
                radius,
                paint,
            });
        }
    }

    fn stroke_arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, paint: Paint) {
        if radius > 0.0 && end > start {
            self.calls.push(DrawCall::StrokeArc {
                x,
                y,
                radius,
                start,
                end,
                paint,
            });
        }
    }

    fn text(&mut self, x: f64, y: f64, text: &str) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
        });
    }
}
