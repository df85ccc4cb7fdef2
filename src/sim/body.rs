//! The player's car
//!
//! Motion is driven by `rel_vel`, a body-frame velocity (x = longitudinal,
//! y = lateral) rotated into the world each tick. A second, world-frame
//! `velocity` is kept alongside it: acceleration and wall bounces write to it,
//! but it does not move the car.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::segment::Segment;
use crate::consts::*;
use crate::{heading_forward, heading_lateral};

/// Default target for `Body::steer_toward` (middle of the infield)
pub const STEER_TARGET: Vec2 = Vec2::new(625.0, 360.0);

/// A car body with an oriented rectangular footprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Exact (unsnapped) centre position
    pub pos: Vec2,
    /// World-frame velocity (bounce target, does not drive motion)
    pub velocity: Vec2,
    /// Body-frame velocity: x = longitudinal, y = lateral
    pub rel_vel: Vec2,
    /// Heading in radians, 0 = nose along +y
    pub angle: f32,
    pub width: f32,
    pub height: f32,
    spawn: Vec2,
}

impl Default for Body {
    fn default() -> Self {
        Self::new(Vec2::new(SPAWN_X, SPAWN_Y))
    }
}

impl Body {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            velocity: Vec2::ZERO,
            rel_vel: Vec2::ZERO,
            angle: 0.0,
            width: CAR_WIDTH,
            height: CAR_HEIGHT,
            spawn,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn heading(&self) -> f32 {
        self.angle
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    /// Put the car back on the grid, stationary and facing heading 0
    pub fn reset(&mut self) {
        self.pos = self.spawn;
        self.velocity = Vec2::ZERO;
        self.rel_vel = Vec2::ZERO;
        self.angle = 0.0;
    }

    /// Advance one tick: damping, integration, world-edge clamp
    pub fn update(&mut self) {
        self.rel_vel.x *= LONGITUDINAL_DAMPING;
        self.rel_vel.y *= LATERAL_DAMPING;

        self.pos += heading_forward(self.angle) * self.rel_vel.x
            + heading_lateral(self.angle) * self.rel_vel.y;

        self.clamp_to_world();
    }

    /// Keep the footprint inside the world rectangle
    ///
    /// The bounce scales the world-frame `velocity`; `rel_vel` is left alone,
    /// so a car pushing into a wall keeps pushing.
    fn clamp_to_world(&mut self) {
        let (left, right) = (self.left(), self.right());
        if left < 0.0 {
            self.pos.x -= left;
            self.velocity.x *= BOUNCE;
            log::trace!("bounce off left edge");
        } else if right > WORLD_WIDTH {
            self.pos.x -= right - WORLD_WIDTH;
            self.velocity.x *= BOUNCE;
            log::trace!("bounce off right edge");
        }

        let (top, bottom) = (self.top(), self.bottom());
        if top < 0.0 {
            self.pos.y -= top;
            self.velocity.y *= BOUNCE;
            log::trace!("bounce off top edge");
        } else if bottom > WORLD_HEIGHT {
            self.pos.y -= bottom - WORLD_HEIGHT;
            self.velocity.y *= BOUNCE;
            log::trace!("bounce off bottom edge");
        }
    }

    /// Push along the current heading
    pub fn accelerate(&mut self, magnitude: f32) {
        self.velocity += heading_forward(self.angle) * magnitude;
        self.rel_vel.x += magnitude;
    }

    /// Rotate the heading. Body-frame velocity is carried over unrotated.
    pub fn turn(&mut self, delta: f32) {
        // TODO: apply drifted_rel_vel(delta) here once a tire grip model decides
        // how much of the old velocity survives a turn.
        self.angle += delta;
    }

    /// Body-frame velocity as it would look after rotating the car by `delta`
    ///
    /// Not applied by `turn`; the game has no drift model.
    pub fn drifted_rel_vel(&self, delta: f32) -> Vec2 {
        let (sin, cos) = delta.sin_cos();
        Vec2::new(
            self.rel_vel.x * cos + self.rel_vel.y * sin,
            -self.rel_vel.x * sin + self.rel_vel.y * cos,
        )
    }

    /// Scrub longitudinal speed by a fixed factor
    ///
    /// `_force` is accepted for input symmetry but has no effect.
    pub fn brake(&mut self, _force: f32) {
        self.rel_vel.x *= BRAKE_FACTOR;
    }

    /// Sideways shuffle
    pub fn nudge_lateral(&mut self, delta: f32) {
        self.rel_vel.y += delta;
    }

    /// Pull the world-frame velocity toward `target`
    pub fn steer_toward(&mut self, target: Vec2) {
        let to_self = self.pos - target;
        let angle = FRAC_PI_2 - to_self.y.atan2(to_self.x);
        self.velocity -= heading_forward(angle) * STEER_PULL;
    }

    /// The four footprint corners, in winding order
    ///
    /// Corner 0 is rear-right (relative to the nose at heading 0), then
    /// front-right, front-left, rear-left.
    pub fn corners(&self) -> [Vec2; 4] {
        let half_len = heading_forward(self.angle) * (self.height / 2.0);
        let half_wid = heading_lateral(self.angle) * (self.width / 2.0);
        [
            self.pos - half_len + half_wid,
            self.pos + half_len + half_wid,
            self.pos + half_len - half_wid,
            self.pos - half_len - half_wid,
        ]
    }

    /// Footprint outline: one segment per pair of consecutive corners
    pub fn edges(&self) -> [Segment; 4] {
        let c = self.corners();
        [
            Segment::new(c[0], c[1]),
            Segment::new(c[1], c[2]),
            Segment::new(c[2], c[3]),
            Segment::new(c[3], c[0]),
        ]
    }

    pub fn left(&self) -> f32 {
        self.corners().iter().map(|c| c.x).fold(f32::INFINITY, f32::min)
    }

    pub fn right(&self) -> f32 {
        self.corners().iter().map(|c| c.x).fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn top(&self) -> f32 {
        self.corners().iter().map(|c| c.y).fold(f32::INFINITY, f32::min)
    }

    pub fn bottom(&self) -> f32 {
        self.corners().iter().map(|c| c.y).fold(f32::NEG_INFINITY, f32::max)
    }
}
