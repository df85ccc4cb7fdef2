//! Circuit Racer - A top-down lap-timed racing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (segments, car body, circuit, tick loop)
//! - `render`: Render-boundary vertex data built from simulation state
//! - `session`: Fixed timestep driver tying input, simulation and draw data together
//! - `leaderboard`: Sorted lap-time view for the HUD
//! - `settings`: Presentation settings passed explicitly to the render boundary

pub mod leaderboard;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use leaderboard::{LapBoard, LapEntry, LapHighlight};
pub use session::Session;
pub use settings::{Palette, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per displayed frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the accumulator accepts (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// World extents (the car is clamped inside this rectangle)
    pub const WORLD_WIDTH: f32 = 1270.0;
    pub const WORLD_HEIGHT: f32 = 720.0;

    /// Spawn pose
    pub const SPAWN_X: f32 = 186.0;
    pub const SPAWN_Y: f32 = 435.0;

    /// Car footprint: 10 x 23 sprite scaled by 2
    pub const CAR_SIZE_MOD: f32 = 2.0;
    pub const CAR_WIDTH: f32 = 10.0 * CAR_SIZE_MOD;
    pub const CAR_HEIGHT: f32 = 23.0 * CAR_SIZE_MOD;

    /// Per-tick damping of body-frame velocity
    pub const LONGITUDINAL_DAMPING: f32 = 0.975;
    pub const LATERAL_DAMPING: f32 = 0.94;
    /// Applied to world velocity when the car hits a world edge
    pub const BOUNCE: f32 = -0.9;
    /// Longitudinal speed kept per braking tick
    pub const BRAKE_FACTOR: f32 = 0.88;

    /// Control magnitudes (per tick while held)
    pub const ACCELERATION: f32 = 0.20;
    pub const TURN_RATE: f32 = 0.06 * 0.95;
    pub const LATERAL_NUDGE: f32 = 0.06;
    pub const BRAKE_FORCE: f32 = 4.0;
    /// Pull applied by `Body::steer_toward`
    pub const STEER_PULL: f32 = 0.06;

    /// Lap clock penalty per out-of-bounds tick (seconds)
    pub const OUT_OF_BOUNDS_PENALTY: f64 = 0.001;

    /// Slope reported for vertical segments
    pub const VERTICAL_GRADIENT: f32 = -2.809;
    /// Residual tolerance for `Segment::contains_point_approx`
    pub const POINT_TOLERANCE: f32 = 100.0;
}

/// Unit vector pointing along `heading` (0 = up the screen's y axis, +y)
///
/// This is the direction longitudinal velocity moves the car in.
#[inline]
pub fn heading_forward(heading: f32) -> Vec2 {
    Vec2::new(heading.sin(), heading.cos())
}

/// Unit vector perpendicular to `heading_forward`, the lateral axis
#[inline]
pub fn heading_lateral(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), -heading.sin())
}
