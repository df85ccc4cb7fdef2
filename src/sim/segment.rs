//! Line segment geometry for track edges, gates and car outlines
//!
//! A segment is the only collision primitive in the game: the car is four
//! segments, the track is two closed loops of segments, and every gate is one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{POINT_TOLERANCE, VERTICAL_GRADIENT};

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    /// Stroke width for rendering (no effect on collision)
    #[serde(default = "default_width")]
    pub width: f32,
}

fn default_width() -> f32 {
    1.0
}

/// True if `a`, `b`, `c` make a counter-clockwise turn
#[inline]
fn ccw(a: Vec2, b: Vec2, c: Vec2) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            width: default_width(),
        }
    }

    pub fn with_width(start: Vec2, end: Vec2, width: f32) -> Self {
        Self { start, end, width }
    }

    /// Build the closed loop of segments around a polygon (last vertex joins the first)
    ///
    /// Callers pass at least 3 vertices.
    pub fn closed_loop(vertices: &[Vec2]) -> Vec<Segment> {
        debug_assert!(vertices.len() >= 3, "polygon needs at least 3 vertices");
        vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(&a, &b)| Segment::new(a, b))
            .collect()
    }

    /// Slope of the infinite line through the segment
    ///
    /// Vertical segments report `VERTICAL_GRADIENT` instead of dividing by zero.
    pub fn gradient(&self) -> f32 {
        let dx = self.end.x - self.start.x;
        if dx == 0.0 {
            return VERTICAL_GRADIENT;
        }
        (self.end.y - self.start.y) / dx
    }

    /// Where the infinite line crosses x = 0
    pub fn y_intercept(&self) -> f32 {
        self.start.y - self.gradient() * self.start.x
    }

    /// Proper crossing test between two segments
    ///
    /// Collinear and endpoint-touching pairs fall out of the orientation
    /// comparison however they fall; they are not special-cased.
    pub fn intersects(&self, other: &Segment) -> bool {
        let (a, b, c, d) = (self.start, self.end, other.start, other.end);
        ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
    }

    /// Loose hit-test: inside the segment's bounding box (exclusive) and
    /// within `POINT_TOLERANCE` below the line's extension.
    ///
    /// The residual is signed, so points far above the line still pass.
    pub fn contains_point_approx(&self, x: f32, y: f32) -> bool {
        let (min, max) = (self.start.min(self.end), self.start.max(self.end));
        min.x < x
            && x < max.x
            && min.y < y
            && y < max.y
            && y - self.gradient() * x - self.y_intercept() < POINT_TOLERANCE
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}
