//! Render boundary
//!
//! Turns simulation state into plain draw data: filled polygons, a triangle
//! list and HUD text. Windowing, fonts and the GPU live outside the crate.

pub mod shapes;
pub mod vertex;

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use vertex::Vertex;

use crate::leaderboard::{LapBoard, format_lap_time};
use crate::settings::{Color, Settings};
use crate::sim::{RaceState, Segment};

/// Polygon for the renderer to fill, in draw order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilledPolygon {
    pub points: Vec<Vec2>,
    pub color: Color,
}

/// One line of HUD text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudText {
    pub text: String,
    pub color: Color,
    /// Top-left anchor in window pixels
    pub position: Vec2,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct FrameData {
    pub clear_color: Color,
    /// Racing surface then infield
    pub polygons: Vec<FilledPolygon>,
    /// Lines and the car, drawn over the polygons
    pub triangles: Vec<Vertex>,
    /// Car centre and heading for sprite-based renderers
    pub car_position: Vec2,
    pub car_heading: f32,
    pub hud: Vec<HudText>,
}

fn outline(edges: &[Segment]) -> Vec<Vec2> {
    edges.iter().map(|e| e.start).collect()
}

/// Build the draw data for the current state
pub fn build_frame(state: &RaceState, settings: &Settings) -> FrameData {
    let palette = &settings.palette;
    let circuit = &state.circuit;

    let polygons = vec![
        FilledPolygon {
            points: outline(circuit.outer_edges()),
            color: palette.track,
        },
        FilledPolygon {
            points: outline(circuit.inner_edges()),
            color: palette.floor,
        },
    ];

    let mut triangles = shapes::segment(circuit.start_line(), palette.start_line);
    for (gate, &crossed) in circuit.checkpoints().iter().zip(circuit.checks()) {
        triangles.extend(shapes::segment(gate, palette.checkpoint_color(crossed)));
    }
    if settings.show_bounds_rays {
        let origin = circuit.parity_origin();
        for corner in state.body.corners() {
            triangles.extend(shapes::thick_line(origin, corner, 1.0, palette.hud_off_track));
        }
    }
    triangles.extend(shapes::quad(state.body.corners(), palette.car));

    FrameData {
        clear_color: palette.floor,
        polygons,
        triangles,
        car_position: state.body.position(),
        car_heading: state.body.heading(),
        hud: hud_lines(state, settings),
    }
}

/// Lap clock at the top, leaderboard below it
fn hud_lines(state: &RaceState, settings: &Settings) -> Vec<HudText> {
    let palette = &settings.palette;
    let clock_color = if state.in_bounds {
        palette.hud_text
    } else {
        palette.hud_off_track
    };

    let mut lines = vec![HudText {
        text: format_lap_time(state.lap_time(), settings.time_decimals),
        color: clock_color,
        position: Vec2::ZERO,
    }];

    let board = LapBoard::from_circuit(&state.circuit);
    for (i, entry) in board.entries.iter().take(settings.board_entries).enumerate() {
        lines.push(HudText {
            text: format_lap_time(entry.time, settings.time_decimals),
            color: palette.lap_color(entry.highlight),
            position: Vec2::new(0.0, settings.line_spacing * i as f32 + 60.0),
        });
    }

    lines
}
