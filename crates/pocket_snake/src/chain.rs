//! The moving chain of segments.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::geometry::{Bounds, Direction, Hitbox, Point};

/// Side length of a segment's hitbox.
pub const SEGMENT_SIZE: f32 = 30.0;

/// Distance between consecutive segments when the chain is laid out.
pub const SEGMENT_SPACING: f32 = 40.0;

/// A shrink that would leave the chain without a head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ChainError {
    /// Only the head is left.
    #[display("Chain is too short to shrink")]
    BodyTooShort,
    /// A chain was described without any segments.
    #[display("Chain needs at least one segment")]
    NoSegments,
}

/// An ordered chain of segments, head first and tail last.
///
/// The chain moves rigidly: every segment is translated by the same step in
/// the current heading. It always has at least one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(try_from = "ChainParts")]
pub struct Chain {
    /// Segment centres, head first.
    segments: Vec<Point>,
    /// Heading used by the next advance.
    heading: Direction,
}

/// Unchecked serialized form of a [`Chain`].
#[derive(Deserialize)]
struct ChainParts {
    segments: Vec<Point>,
    heading: Direction,
}

impl TryFrom<ChainParts> for Chain {
    type Error = ChainError;

    fn try_from(parts: ChainParts) -> Result<Self, Self::Error> {
        Self::from_segments(parts.segments, parts.heading).ok_or(ChainError::NoSegments)
    }
}

impl Chain {
    /// Lays out `length` segments (at least one) trailing behind `head`.
    #[instrument]
    pub fn new(head: Point, heading: Direction, length: usize) -> Self {
        let (dx, dy) = heading.opposite().unit();
        let segments = (0..length.max(1))
            .map(|i| {
                let distance = i as f32 * SEGMENT_SPACING;
                head.offset(dx * distance, dy * distance)
            })
            .collect();
        Self { segments, heading }
    }

    /// Builds a chain from explicit segment positions, head first.
    ///
    /// Returns `None` when `segments` is empty.
    #[instrument]
    pub fn from_segments(segments: Vec<Point>, heading: Direction) -> Option<Self> {
        (!segments.is_empty()).then_some(Self { segments, heading })
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a chain keeps its head.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Position of the head.
    pub fn head(&self) -> Point {
        self.segments[0]
    }

    /// Position of the tail (the head, for a one-segment chain).
    pub fn tail(&self) -> Point {
        self.segments[self.segments.len() - 1]
    }

    /// Sets the heading for the next advance.
    #[instrument(skip(self))]
    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    /// Moves every segment `step` units along the heading.
    #[instrument(skip(self), fields(heading = %self.heading))]
    pub fn advance(&mut self, step: f32) {
        let (dx, dy) = self.heading.unit();
        for segment in &mut self.segments {
            *segment = segment.offset(dx * step, dy * step);
        }
    }

    /// Inserts a segment just before the tail.
    ///
    /// The new segment takes the tail's place and the tail moves one spacing
    /// further back, continuing the line of the last two segments.
    #[instrument(skip(self), fields(len = self.segments.len()))]
    pub fn grow(&mut self) {
        let tail = self.tail();
        let (mut dx, mut dy) = match self.segments.len() {
            1 => (0.0, 0.0),
            n => tail.minus(self.segments[n - 2]),
        };
        if dx == 0.0 && dy == 0.0 {
            let (ux, uy) = self.heading.opposite().unit();
            dx = ux * SEGMENT_SPACING;
            dy = uy * SEGMENT_SPACING;
        }

        let last = self.segments.len() - 1;
        self.segments.insert(last, tail);
        self.segments[last + 1] = tail.offset(dx, dy);
        debug!(len = self.segments.len(), "Chain grew");
    }

    /// Removes the segment just before the tail, or the tail itself when only
    /// head and tail remain.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::BodyTooShort`] and leaves the chain untouched
    /// when only the head is left.
    #[instrument(skip(self), fields(len = self.segments.len()))]
    pub fn shrink(&mut self) -> Result<(), ChainError> {
        let index = match self.segments.len() {
            0 | 1 => return Err(ChainError::BodyTooShort),
            2 => 1,
            n => n - 2,
        };
        self.segments.remove(index);
        debug!(len = self.segments.len(), "Chain shrank");
        Ok(())
    }

    /// Hitbox of the head.
    pub fn head_hitbox(&self) -> Hitbox {
        Hitbox::new(self.head(), SEGMENT_SIZE)
    }

    /// True when the head overlaps `target`.
    pub fn head_collides_with(&self, target: &Hitbox) -> bool {
        self.head_hitbox().overlaps(target)
    }

    /// True when the head overlaps a segment other than itself and its
    /// immediate neighbour.
    pub fn head_collides_with_self(&self) -> bool {
        let head = self.head_hitbox();
        self.segments
            .iter()
            .skip(2)
            .any(|segment| head.overlaps(&Hitbox::new(*segment, SEGMENT_SIZE)))
    }

    /// True when the head is on or beyond an edge of `bounds`.
    pub fn head_out_of_bounds(&self, bounds: &Bounds) -> bool {
        bounds.is_outside(self.head())
    }
}
