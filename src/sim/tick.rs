//! Fixed timestep simulation tick
//!
//! Order within a tick: controls, integration, in-bounds check, lap update,
//! off-track penalty.

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use super::circuit::LapEvent;
use super::state::RaceState;
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Throttle (nose direction)
    pub forward: bool,
    /// Throttle backwards
    pub reverse: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub brake: bool,
    /// Sideways shuffle
    pub slide_left: bool,
    pub slide_right: bool,
    /// One-shot: snap a quarter turn clockwise
    pub quarter_turn: bool,
    /// One-shot: car back to the grid, lap abandoned
    pub reset: bool,
    /// Stop the loop
    pub quit: bool,
}

impl TickInput {
    /// Drop one-shot commands after they have been applied
    pub fn clear_one_shots(&mut self) {
        self.quarter_turn = false;
        self.reset = false;
    }
}

/// Apply held and one-shot controls to the car
fn apply_controls(state: &mut RaceState, input: &TickInput) {
    if input.reset {
        state.reset();
    }
    if input.quarter_turn {
        state.body.turn(-FRAC_PI_2);
    }

    let body = &mut state.body;
    // Negative magnitude drives toward the nose
    if input.forward {
        body.accelerate(-ACCELERATION);
    }
    if input.reverse {
        body.accelerate(ACCELERATION);
    }
    if input.turn_left {
        body.turn(TURN_RATE);
    }
    if input.turn_right {
        body.turn(-TURN_RATE);
    }
    if input.brake {
        body.brake(BRAKE_FORCE);
    }
    if input.slide_left {
        body.nudge_lateral(-LATERAL_NUDGE);
    }
    if input.slide_right {
        body.nudge_lateral(LATERAL_NUDGE);
    }
}

/// Advance the race by one fixed timestep
pub fn tick(state: &mut RaceState, input: &TickInput) -> Option<LapEvent> {
    if input.quit {
        if state.running {
            log::info!("quit requested at tick {}", state.time_ticks);
        }
        state.running = false;
    }
    if !state.running {
        return None;
    }

    state.time_ticks += 1;
    let now = state.now();

    apply_controls(state, input);
    state.body.update();

    let in_bounds = state.circuit.contains_body(&state.body);
    if in_bounds != state.in_bounds {
        log::debug!("car {} the track", if in_bounds { "rejoined" } else { "left" });
    }
    state.in_bounds = in_bounds;

    let event = state.circuit.update(&state.body, now);
    if event.is_some() {
        state.last_event = event;
    }

    if !state.in_bounds {
        state.circuit.apply_out_of_bounds_penalty();
    }

    event
}
