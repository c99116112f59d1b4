//! Points, headings, boxes and the arena boundary.

use serde::{Deserialize, Serialize};

/// A position in arena units. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, derive_new::new)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Returns the point moved by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Vector from `other` to `self`.
    pub fn minus(self, other: Point) -> (f32, f32) {
        (self.x - other.x, self.y - other.y)
    }
}

/// One of the four headings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Direction {
    /// Towards smaller `y`.
    Up,
    /// Towards larger `y`.
    Down,
    /// Towards smaller `x`.
    Left,
    /// Towards larger `x`.
    Right,
}

impl Direction {
    /// Unit vector for this heading.
    pub fn unit(self) -> (f32, f32) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }

    /// The opposite heading.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// An axis-aligned square centred on a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Hitbox {
    /// Centre of the square.
    pub center: Point,
    /// Side length.
    pub size: f32,
}

impl Hitbox {
    /// True when the two squares overlap. Touching edges do not count.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        let reach = (self.size + other.size) / 2.0;
        (self.center.x - other.center.x).abs() < reach
            && (self.center.y - other.center.y).abs() < reach
    }
}

/// The playable rectangle, from the origin to `(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Bounds {
    /// Arena width.
    pub width: f32,
    /// Arena height.
    pub height: f32,
}

impl Bounds {
    /// True when `point` lies on or beyond any edge.
    pub fn is_outside(&self, point: Point) -> bool {
        point.x <= 0.0 || point.x >= self.width || point.y <= 0.0 || point.y >= self.height
    }
}
