//! In-bounds detection by ray-crossing parity
//!
//! A ray is cast from a point inside the inner track edge to each corner of
//! the car. Crossing the wall set an odd number of times means the corner sits
//! between the two edges, on the racing surface.

use glam::Vec2;

use super::segment::Segment;

/// Number of walls crossed by the ray `origin -> point`
pub fn ray_crossings(origin: Vec2, point: Vec2, walls: &[Segment]) -> usize {
    let ray = Segment::new(origin, point);
    walls.iter().filter(|wall| ray.intersects(wall)).count()
}

/// True if `point` is on the track surface as seen from `origin`
pub fn point_in_bounds(origin: Vec2, point: Vec2, walls: &[Segment]) -> bool {
    ray_crossings(origin, point, walls) % 2 == 1
}

/// True only if every corner is on the track surface
pub fn corners_in_bounds(origin: Vec2, corners: &[Vec2], walls: &[Segment]) -> bool {
    corners
        .iter()
        .all(|&corner| point_in_bounds(origin, corner, walls))
}
