//! Geometry primitives shared by the collision rules and the renderers.

use serde::{Deserialize, Serialize};

/// Axis-aligned box in playfield coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Where a shape sits relative to the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Fully inside (edges may touch).
    Inside,
    /// Partly inside.
    Straddling,
    /// Zero overlap.
    Outside,
}

impl Aabb {
    /// Box from its top-left corner and size. Negative sizes collapse to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width.max(0.0),
            bottom: y + height.max(0.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Projections overlap on both axes. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Classify `self` against the `field` rectangle.
    pub fn containment_in(&self, field: &Aabb) -> Containment {
        if !self.overlaps(field) {
            Containment::Outside
        } else if self.left >= field.left
            && self.right <= field.right
            && self.top >= field.top
            && self.bottom <= field.bottom
        {
            Containment::Inside
        } else {
            Containment::Straddling
        }
    }
}

/// Round actor (ball).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn bounds(&self) -> Aabb {
        let r = self.radius.max(0.0);
        Aabb {
            left: self.x - r,
            top: self.y - r,
            right: self.x + r,
            bottom: self.y + r,
        }
    }
}

/// Grid cell for grid-based games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn offset(self, (dx, dy): (i16, i16)) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: i16,
    pub height: i16,
}

impl GridSize {
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }
}
