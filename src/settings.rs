//! Presentation settings
//!
//! Window, HUD font and colours. Passed explicitly to the render boundary;
//! the simulation never reads them.

use serde::{Deserialize, Serialize};

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::leaderboard::{LapHighlight, MAX_BOARD_ENTRIES};

/// Linear RGBA colour
pub type Color = [f32; 4];

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colours for game elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Background and infield
    pub floor: Color,
    /// Racing surface
    pub track: Color,
    /// Edge lines
    pub wall: Color,
    pub start_line: Color,
    pub checkpoint: Color,
    pub checkpoint_crossed: Color,
    pub car: Color,
    /// HUD text while on track
    pub hud_text: Color,
    /// HUD lap clock while off track
    pub hud_off_track: Color,
    /// Most recent lap on the leaderboard
    pub latest_lap: Color,
    /// Gold, silver, bronze
    pub podium: [Color; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            floor: rgb(244, 226, 198),
            track: rgb(100, 100, 100),
            wall: rgb(255, 255, 255),
            start_line: rgb(0, 0, 255),
            checkpoint: rgb(0, 0, 255),
            checkpoint_crossed: rgb(173, 216, 230),
            car: rgb(200, 30, 30),
            hud_text: rgb(255, 255, 255),
            hud_off_track: rgb(255, 0, 0),
            latest_lap: rgb(0, 255, 0),
            podium: [rgb(212, 175, 55), rgb(192, 192, 192), rgb(176, 141, 87)],
        }
    }
}

impl Palette {
    /// Colour for a leaderboard row
    pub fn lap_color(&self, highlight: LapHighlight) -> Color {
        match highlight {
            LapHighlight::Latest => self.latest_lap,
            LapHighlight::Podium(rank) => self.podium[rank.min(2)],
            LapHighlight::Plain => self.hud_text,
        }
    }

    pub fn checkpoint_color(&self, crossed: bool) -> Color {
        if crossed {
            self.checkpoint_crossed
        } else {
            self.checkpoint
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    /// Frame pacing target for the outer loop
    pub target_fps: u32,

    // === HUD ===
    pub font_family: String,
    pub font_size: f32,
    /// Vertical spacing between leaderboard rows
    pub line_spacing: f32,
    /// Rounding of displayed lap times
    pub time_decimals: usize,
    pub board_entries: usize,

    // === Debug overlays ===
    /// Draw the in-bounds rays from the parity origin to each car corner
    pub show_bounds_rays: bool,

    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WORLD_WIDTH as u32,
            window_height: WORLD_HEIGHT as u32,
            window_title: "race car".to_string(),
            target_fps: 60,

            font_family: "arial".to_string(),
            font_size: 30.0,
            line_spacing: 50.0,
            time_decimals: 5,
            board_entries: MAX_BOARD_ENTRIES,

            show_bounds_rays: false,

            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON text; missing fields are an error
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings = serde_json::from_str(json)?;
        log::info!("Loaded settings");
        Ok(settings)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
