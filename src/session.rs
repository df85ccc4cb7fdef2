//! Fixed timestep driver
//!
//! Accumulates real frame time and runs whole simulation ticks, capped per
//! frame so a stall can't snowball into an ever longer catch-up.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::render::{FrameData, build_frame};
use crate::settings::Settings;
use crate::sim::{LapEvent, RaceState, TickInput, TrackLayout, tick};

/// A running race plus its frame-time accumulator
#[derive(Debug, Clone)]
pub struct Session {
    pub state: RaceState,
    /// Latest sampled input; one-shots are cleared after the first tick uses them
    pub input: TickInput,
    accumulator: f32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&TrackLayout::default())
    }
}

impl Session {
    pub fn new(layout: &TrackLayout) -> Self {
        log::info!("session started on a {}-gate circuit", layout.checkpoints.len());
        Self {
            state: RaceState::new(layout),
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Run as many ticks as `frame_dt` seconds cover; returns lap events in order
    pub fn advance(&mut self, frame_dt: f32) -> Vec<LapEvent> {
        let dt = frame_dt.min(MAX_FRAME_DT);
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            if let Some(event) = tick(&mut self.state, &self.input) {
                events.push(event);
            }
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.clear_one_shots();
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::warn!("dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        events
    }

    /// Draw data for the current state
    pub fn frame(&self, settings: &Settings) -> FrameData {
        build_frame(&self.state, settings)
    }
}
