//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one tick per frame
//! - Time comes from the tick counter, never the wall clock
//! - No rendering or platform dependencies

pub mod body;
pub mod boundary;
pub mod circuit;
pub mod layout;
pub mod segment;
pub mod state;
pub mod tick;

pub use body::Body;
pub use boundary::{corners_in_bounds, point_in_bounds, ray_crossings};
pub use circuit::{Circuit, LapEvent};
pub use layout::TrackLayout;
pub use segment::Segment;
pub use state::RaceState;
pub use tick::{TickInput, tick};
