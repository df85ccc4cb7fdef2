//! Circuit Racer entry point
//!
//! Native build runs headless: a scripted drive up the start straight, with
//! lap events and the final HUD written to the log. Windowing and keyboard
//! polling belong to a front end that feeds `Session::input` each frame.

use circuit_racer::consts::SIM_DT;
use circuit_racer::sim::{LapEvent, TrackLayout};
use circuit_racer::{Session, Settings};

/// Frames of throttle, then frames of coasting
const THROTTLE_FRAMES: u32 = 60;
const COAST_FRAMES: u32 = 240;

fn load_layout() -> TrackLayout {
    let Some(path) = std::env::args().nth(1) else {
        return TrackLayout::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => match TrackLayout::from_json(&json) {
            Ok(layout) => layout,
            Err(e) => {
                log::error!("Bad track layout in {}: {}", path, e);
                TrackLayout::default()
            }
        },
        Err(e) => {
            log::error!("Could not read {}: {}", path, e);
            TrackLayout::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Circuit Racer (headless) starting...");

    let settings = Settings::default();
    let mut session = Session::new(&load_layout());

    for frame in 0..THROTTLE_FRAMES + COAST_FRAMES {
        session.input.forward = frame < THROTTLE_FRAMES;
        session.input.quit = frame + 1 == THROTTLE_FRAMES + COAST_FRAMES;

        for event in session.advance(SIM_DT) {
            match event {
                LapEvent::Started => log::info!("Lap clock started at frame {}", frame),
                LapEvent::Completed { index, time, best } => {
                    log::info!("Lap {} in {:.5}s{}", index + 1, time, if best { " (best)" } else { "" })
                }
            }
        }
        if !session.is_running() {
            break;
        }
    }

    let state = &session.state;
    log::info!(
        "Stopped at ({:.1}, {:.1}) heading {:.3}, {} gates crossed, {}",
        state.body.pos.x,
        state.body.pos.y,
        state.body.angle,
        state.circuit.checks().iter().filter(|&&c| c).count(),
        if state.in_bounds { "on track" } else { "off track" }
    );
    for line in session.frame(&settings).hud {
        log::info!("HUD: {}", line.text);
    }
}
