//! Race state and core simulation types
//!
//! Everything the tick mutates lives here: the car, the circuit and the
//! simulation clock.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::circuit::{Circuit, LapEvent};
use super::layout::TrackLayout;
use crate::consts::SIM_DT;

/// Complete race state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceState {
    /// Player car
    pub body: Body,
    /// Track geometry and lap bookkeeping
    pub circuit: Circuit,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Whether all four car corners were on the track last tick
    pub in_bounds: bool,
    /// Cleared when a quit input is seen
    pub running: bool,
    /// Most recent lap event, kept for the HUD
    pub last_event: Option<LapEvent>,
}

impl Default for RaceState {
    fn default() -> Self {
        Self::new(&TrackLayout::default())
    }
}

impl RaceState {
    /// Create a race on the given layout with the car on the grid
    pub fn new(layout: &TrackLayout) -> Self {
        Self {
            body: Body::default(),
            circuit: Circuit::new(layout, 0.0),
            time_ticks: 0,
            in_bounds: true,
            running: true,
            last_event: None,
        }
    }

    /// Simulation time in seconds
    pub fn now(&self) -> f64 {
        self.time_ticks as f64 * f64::from(SIM_DT)
    }

    /// Current lap time in seconds (0 before the clock starts)
    pub fn lap_time(&self) -> f64 {
        self.circuit.lap_time(self.now())
    }

    /// Put the car back on the grid and abandon the current lap
    pub fn reset(&mut self) {
        let now = self.now();
        self.body.reset();
        self.circuit.reset(now);
        self.in_bounds = true;
        log::info!("race reset at tick {}", self.time_ticks);
    }
}
