//! Shape generation for 2D primitives
//!
//! Everything comes out as a triangle list.

use glam::Vec2;

use super::vertex::Vertex;
use crate::settings::Color;
use crate::sim::Segment;

fn push_quad(vertices: &mut Vec<Vertex>, q: [Vec2; 4], color: Color) {
    // Two triangles: 0-1-2, 2-3-0
    for i in [0, 1, 2, 2, 3, 0] {
        vertices.push(Vertex::new(q[i].x, q[i].y, color));
    }
}

/// Filled quad from four corners in winding order
pub fn quad(corners: [Vec2; 4], color: Color) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_quad(&mut vertices, corners, color);
    vertices
}

/// Line of the given width as a quad
pub fn thick_line(start: Vec2, end: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let dir = (end - start).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    quad([start + perp, end + perp, end - perp, start - perp], color)
}

/// A segment drawn with its own stroke width
pub fn segment(seg: &Segment, color: Color) -> Vec<Vertex> {
    thick_line(seg.start, seg.end, seg.width, color)
}

/// Many segments in one color
pub fn segments(segs: &[Segment], color: Color) -> Vec<Vertex> {
    segs.iter().flat_map(|s| segment(s, color)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_thick_line_width() {
        let verts = thick_line(Vec2::ZERO, Vec2::new(10.0, 0.0), 4.0, RED);
        assert_eq!(verts.len(), 6);
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        let span = ys.iter().cloned().fold(f32::MIN, f32::max)
            - ys.iter().cloned().fold(f32::MAX, f32::min);
        assert!((span - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(thick_line(Vec2::ONE, Vec2::ONE, 3.0, RED).is_empty());
    }

    #[test]
    fn test_segments_batch() {
        let segs = [
            Segment::new(Vec2::ZERO, Vec2::X),
            Segment::new(Vec2::X, Vec2::ONE),
        ];
        assert_eq!(segments(&segs, RED).len(), 12);
    }
}
