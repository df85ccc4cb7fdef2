//! Static circuit description
//!
//! Plain coordinate data, supplied once when the circuit is built. The stock
//! circuit is the `Default`; other layouts can be parsed from JSON text.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stock circuit, outer edge (clockwise on screen)
const OUTER: [(f32, f32); 10] = [
    (149.0, 464.0),
    (133.0, 138.0),
    (157.0, 113.0),
    (553.0, 35.0),
    (693.0, 205.0),
    (981.0, 160.0),
    (1163.0, 251.0),
    (1093.0, 607.0),
    (448.0, 682.0),
    (163.0, 547.0),
];

/// Stock circuit, inner edge
const INNER: [(f32, f32); 9] = [
    (228.0, 486.0),
    (208.0, 210.0),
    (253.0, 158.0),
    (496.0, 113.0),
    (661.0, 274.0),
    (943.0, 238.0),
    (1041.0, 292.0),
    (1015.0, 544.0),
    (469.0, 597.0),
];

const START_LINE: ((f32, f32), (f32, f32)) = ((145.0, 378.0), (221.0, 374.0));

/// Gates in driving order, starting just past the start line
const CHECKPOINTS: [((f32, f32), (f32, f32)); 11] = [
    ((138.0, 242.0), (209.0, 237.0)),
    ((336.0, 77.0), (341.0, 142.0)),
    ((575.0, 62.0), (509.0, 126.0)),
    ((681.0, 192.0), (628.0, 241.0)),
    ((790.0, 189.0), (796.0, 254.0)),
    ((1034.0, 188.0), (992.0, 264.0)),
    ((1036.0, 335.0), (1142.0, 356.0)),
    ((1108.0, 529.0), (1018.0, 519.0)),
    ((919.0, 626.0), (907.0, 557.0)),
    ((482.0, 678.0), (491.0, 596.0)),
    ((297.0, 610.0), (340.0, 538.0)),
];

/// Point inside the inner edge used as the origin of in-bounds rays
const PARITY_ORIGIN: (f32, f32) = (635.0, 360.0);

fn v((x, y): (f32, f32)) -> Vec2 {
    Vec2::new(x, y)
}

/// Geometry needed to build a `Circuit`
///
/// Preconditions: both polygons have at least 3 vertices, there is at least
/// one checkpoint, all coordinates are finite, and `parity_origin` lies
/// inside the inner polygon (the infield).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    pub outer: Vec<Vec2>,
    pub inner: Vec<Vec2>,
    pub start_line: (Vec2, Vec2),
    pub checkpoints: Vec<(Vec2, Vec2)>,
    pub parity_origin: Vec2,
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            outer: OUTER.iter().copied().map(v).collect(),
            inner: INNER.iter().copied().map(v).collect(),
            start_line: (v(START_LINE.0), v(START_LINE.1)),
            checkpoints: CHECKPOINTS.iter().map(|&(a, b)| (v(a), v(b))).collect(),
            parity_origin: v(PARITY_ORIGIN),
        }
    }
}

impl TrackLayout {
    /// Parse a layout from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let layout: Self = serde_json::from_str(json)?;
        log::info!(
            "Loaded track layout: {} outer / {} inner vertices, {} checkpoints",
            layout.outer.len(),
            layout.inner.len(),
            layout.checkpoints.len()
        );
        Ok(layout)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
