//! Lap leaderboard for the HUD
//!
//! A read-only view over the circuit's lap ledger: fastest first, top 10,
//! with the most recent lap flagged so it can be highlighted.

use serde::{Deserialize, Serialize};

use crate::sim::Circuit;

/// Maximum number of laps shown
pub const MAX_BOARD_ENTRIES: usize = 10;

/// How an entry should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LapHighlight {
    /// The lap just driven (wins over podium)
    Latest,
    /// Gold, silver, bronze (0, 1, 2)
    Podium(usize),
    Plain,
}

/// A single leaderboard row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LapEntry {
    /// Lap duration in seconds
    pub time: f64,
    /// Position in the ledger (driving order)
    pub lap_index: usize,
    pub highlight: LapHighlight,
}

/// Sorted view of the lap ledger
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LapBoard {
    pub entries: Vec<LapEntry>,
}

impl LapBoard {
    /// Build from a ledger and the index of the latest lap
    pub fn from_times(times: &[f64], latest: Option<usize>) -> Self {
        let mut order: Vec<usize> = (0..times.len()).collect();
        // Stable: equal times keep driving order
        order.sort_by(|&a, &b| times[a].total_cmp(&times[b]));

        let entries = order
            .into_iter()
            .take(MAX_BOARD_ENTRIES)
            .enumerate()
            .map(|(rank, lap_index)| {
                let highlight = if Some(lap_index) == latest {
                    LapHighlight::Latest
                } else if rank < 3 {
                    LapHighlight::Podium(rank)
                } else {
                    LapHighlight::Plain
                };
                LapEntry {
                    time: times[lap_index],
                    lap_index,
                    highlight,
                }
            })
            .collect();

        Self { entries }
    }

    pub fn from_circuit(circuit: &Circuit) -> Self {
        Self::from_times(circuit.times(), circuit.latest())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fastest lap on the board (if any)
    pub fn best(&self) -> Option<f64> {
        self.entries.first().map(|e| e.time)
    }
}

/// Format a lap time for display, rounded to `decimals`
pub fn format_lap_time(seconds: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, seconds)
}
