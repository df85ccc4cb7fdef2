//! Track edges, checkpoint gates and the lap clock
//!
//! Lap rules:
//! - Gates must be crossed in order; gate `i` only registers once gate `i - 1` has
//! - Crossing the start line with every gate registered completes a lap
//! - Crossing it otherwise only starts the clock (if it isn't running yet)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::boundary::corners_in_bounds;
use super::layout::TrackLayout;
use super::segment::Segment;
use crate::consts::OUT_OF_BOUNDS_PENALTY;

/// Stroke width of the start line
pub const START_LINE_WIDTH: f32 = 3.0;

/// Something the lap state machine did this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LapEvent {
    /// The clock started on the first start-line crossing
    Started,
    /// A lap was completed and recorded at `index` in the ledger
    Completed { index: usize, time: f64, best: bool },
}

/// A closed circuit and its lap bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    outer_edges: Vec<Segment>,
    inner_edges: Vec<Segment>,
    start_line: Segment,
    checkpoints: Vec<Segment>,
    parity_origin: Vec2,
    /// Crossed flag per checkpoint, parallel to `checkpoints`
    checks: Vec<bool>,
    /// Timestamp (seconds) the current lap is measured from
    lap_start: f64,
    started: bool,
    best_time: f64,
    times: Vec<f64>,
    latest: Option<usize>,
}

impl Circuit {
    /// Build the circuit; `now` seeds the lap origin
    pub fn new(layout: &TrackLayout, now: f64) -> Self {
        debug_assert!(!layout.checkpoints.is_empty(), "circuit needs checkpoints");
        Self {
            outer_edges: Segment::closed_loop(&layout.outer),
            inner_edges: Segment::closed_loop(&layout.inner),
            start_line: Segment::with_width(
                layout.start_line.0,
                layout.start_line.1,
                START_LINE_WIDTH,
            ),
            checkpoints: layout
                .checkpoints
                .iter()
                .map(|&(a, b)| Segment::new(a, b))
                .collect(),
            parity_origin: layout.parity_origin,
            checks: vec![false; layout.checkpoints.len()],
            lap_start: now,
            started: false,
            best_time: f64::INFINITY,
            times: Vec::new(),
            latest: None,
        }
    }

    /// Abandon the current lap. The ledger and best time are kept.
    pub fn reset(&mut self, now: f64) {
        self.checks.iter_mut().for_each(|c| *c = false);
        self.lap_start = now;
        self.started = false;
        log::debug!("circuit reset, {} laps on record", self.times.len());
    }

    /// Seconds on the current lap, 0 before the clock has started
    pub fn lap_time(&self, now: f64) -> f64 {
        if self.started {
            now - self.lap_start
        } else {
            0.0
        }
    }

    /// Run the gate and start-line checks for this tick
    pub fn update(&mut self, body: &Body, now: f64) -> Option<LapEvent> {
        let edges = body.edges();
        let touches = |gate: &Segment| edges.iter().any(|edge| gate.intersects(edge));

        for i in 0..self.checkpoints.len() {
            let unlocked = i == 0 || self.checks[i - 1];
            if unlocked && !self.checks[i] && touches(&self.checkpoints[i]) {
                self.checks[i] = true;
                log::debug!("checkpoint {} crossed", i);
            }
        }

        if !touches(&self.start_line) {
            return None;
        }

        if self.all_checked() {
            let time = self.lap_time(now);
            self.checks.iter_mut().for_each(|c| *c = false);
            self.times.push(time);
            let index = self.times.len() - 1;
            self.latest = Some(index);
            let best = time < self.best_time;
            if best {
                self.best_time = time;
            }
            self.lap_start = now;
            log::info!("lap {} completed in {:.5}s (best: {})", index + 1, time, best);
            Some(LapEvent::Completed { index, time, best })
        } else if !self.started {
            self.started = true;
            self.lap_start = now;
            log::debug!("lap clock started");
            Some(LapEvent::Started)
        } else {
            None
        }
    }

    /// True if every corner of `body` is on the racing surface
    pub fn contains_body(&self, body: &Body) -> bool {
        corners_in_bounds(self.parity_origin, &body.corners(), &self.walls())
    }

    /// Soft penalty for a tick spent off the track: the lap clock gains time
    pub fn apply_out_of_bounds_penalty(&mut self) {
        self.lap_start -= OUT_OF_BOUNDS_PENALTY;
    }

    /// Outer and inner edges together
    pub fn walls(&self) -> Vec<Segment> {
        self.outer_edges
            .iter()
            .chain(self.inner_edges.iter())
            .copied()
            .collect()
    }

    pub fn all_checked(&self) -> bool {
        self.checks.iter().all(|&c| c)
    }

    pub fn outer_edges(&self) -> &[Segment] {
        &self.outer_edges
    }

    pub fn inner_edges(&self) -> &[Segment] {
        &self.inner_edges
    }

    pub fn start_line(&self) -> &Segment {
        &self.start_line
    }

    pub fn checkpoints(&self) -> &[Segment] {
        &self.checkpoints
    }

    pub fn checks(&self) -> &[bool] {
        &self.checks
    }

    pub fn parity_origin(&self) -> Vec2 {
        self.parity_origin
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn lap_start(&self) -> f64 {
        self.lap_start
    }

    /// Completed lap durations in the order they were driven
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Fastest lap so far, `f64::INFINITY` before any lap completes
    pub fn best_time(&self) -> f64 {
        self.best_time
    }

    /// Ledger index of the most recently completed lap
    pub fn latest(&self) -> Option<usize> {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CAR_HEIGHT, CAR_WIDTH};

    /// Square ring track: outer 0..300, inner 100..200.
    /// Start line on the left straight, gates top, right, bottom.
    fn square_layout() -> TrackLayout {
        let v = Vec2::new;
        TrackLayout {
            outer: vec![v(0.0, 0.0), v(300.0, 0.0), v(300.0, 300.0), v(0.0, 300.0)],
            inner: vec![
                v(100.0, 100.0),
                v(200.0, 100.0),
                v(200.0, 200.0),
                v(100.0, 200.0),
            ],
            start_line: (v(0.0, 150.0), v(100.0, 150.0)),
            checkpoints: vec![
                (v(150.0, 0.0), v(150.0, 100.0)),
                (v(200.0, 150.0), v(300.0, 150.0)),
                (v(150.0, 200.0), v(150.0, 300.0)),
            ],
            parity_origin: v(150.0, 150.0),
        }
    }

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y))
    }

    fn on_start() -> Body {
        body_at(50.0, 150.0)
    }

    fn on_gate(i: usize) -> Body {
        match i {
            0 => body_at(150.0, 50.0),
            1 => body_at(250.0, 150.0),
            _ => body_at(150.0, 250.0),
        }
    }

    /// Away from every gate but still on track
    fn clear() -> Body {
        body_at(50.0, 50.0)
    }

    fn drive_lap(circuit: &mut Circuit, now: f64) -> Option<LapEvent> {
        for i in 0..3 {
            circuit.update(&on_gate(i), now);
        }
        circuit.update(&on_start(), now)
    }

    #[test]
    fn test_new_circuit_state() {
        let circuit = Circuit::new(&square_layout(), 0.0);
        assert_eq!(circuit.outer_edges().len(), 4);
        assert_eq!(circuit.inner_edges().len(), 4);
        assert_eq!(circuit.checks(), &[false, false, false]);
        assert!(!circuit.is_started());
        assert!(circuit.best_time().is_infinite());
        assert!(circuit.times().is_empty());
        assert_eq!(circuit.latest(), None);
        assert_eq!(circuit.start_line().width, START_LINE_WIDTH);
    }

    #[test]
    fn test_lap_time_zero_before_start() {
        let mut circuit = Circuit::new(&square_layout(), 0.0);
        assert_eq!(circuit.lap_time(10.0), 0.0);
        circuit.update(&clear(), 5.0);
        assert_eq!(circuit.lap_time(10.0), 0.0);
    }

    #[test]
    fn test_start_line_starts_clock() {
        let mut circuit = Circuit::new(&square_layout(), 0.0);
        assert_eq!(circuit.update(&on_start(), 2.0), Some(LapEvent::Started));
        assert!(circuit.is_started());
        let t1 = circuit.lap_time(3.0);
        let t2 = circuit.lap_time(3.5);
        assert!((t1 - 1.0).abs() < 1e-9);
        assert!(t2 > t1);
        // Sitting on the line again does nothing
        assert_eq!(circuit.update(&on_start(), 4.0), None);
        assert!((circuit.lap_start() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_checkpoints_in_order() {
        let mut circuit = Circuit::new(&square_layout(), 0.0);
        circuit.update(&on_gate(0), 1.0);
        assert_eq!(circuit.checks(), &[true, false, false]);
        circuit.update(&on_gate(1), 2.0);
        assert_eq!(circuit.checks(), &[true, true, false]);
    }

    #[test]
    fn test_out_of_order_checkpoint_stays_uncrossed() {
        let mut circuit = Circuit::new(&square_layout(), 0.0);
        circuit.update(&on_gate(1), 1.0);
        circuit.update(&on_gate(2), 2.0);
        assert_eq!(circuit.checks(), &[false, false, false]);

        circuit.update(&on_gate(0), 3.0);
        circuit.update(&on_gate(2), 4.0);
        assert_eq!(circuit.checks(), &[true, false, false]);
    }

    #[test]
    fn test_start_line_without_gates_does_not_complete() {
        let mut circuit = Circuit::new(&square_layout(), 0.0);
        circuit.update(&on_start(), 1.0);
        circuit.update(&on_gate(0), 2.0);
        circuit.update(&on_gate(1), 3.0);
        assert_eq!(circuit.update(&on_start(), 4.0), None);
        assert!(circuit.times().is_empty());
        // Gates stay registered until the lap completes
        assert_eq!(circuit.checks(), &[true, true, false]);
    }

    #[test]
    fn test_lap_completion() {
        let mut circuit = Circuit::new(&square_layout(), 0.0);
        circuit.update(&on_start(), 1.0);
        let event = drive_lap(&mut circuit, 31.0);
        assert_eq!(
            event,
            Some(LapEvent::Completed {
                index: 0,
                time: 30.0,
                best: true
            })
        );
        assert_eq!(circuit.times(), &[30.0]);
        assert_eq!(circuit.latest(), Some(0));
        assert_eq!(circuit.best_time(), 30.0);
        assert_eq!(circuit.checks(), &[false, false, false]);
        // Clock restarts on completion
        assert!(circuit.lap_time(31.0).abs() < 1e-9);
    }

    #[test]
    fn test_ledger_grows_once_per_crossing() {
        let mut circuit = Circuit::new(&square_layout(), 0.0);
        circuit.update(&on_start(), 0.0);
        drive_lap(&mut circuit, 20.0);
        // Still on the line for several more ticks
        for i in 1..10 {
            circuit.update(&on_start(), 20.0 + i as f64 / 60.0);
        }
        assert_eq!(circuit.times().len(), 1);
    }

    #[test]
    fn test_best_and_latest_tracking() {
        let mut circuit = Circuit::new(&square_layout(), 0.0);
        circuit.update(&on_start(), 0.0);
        drive_lap(&mut circuit, 20.0);
        drive_lap(&mut circuit, 35.0);
        let event = drive_lap(&mut circuit, 60.0);
        assert_eq!(circuit.times(), &[20.0, 15.0, 25.0]);
        assert_eq!(circuit.best_time(), 15.0);
        assert_eq!(circuit.latest(), Some(2));
        assert!(matches!(event, Some(LapEvent::Completed { best: false, .. })));
    }

    #[test]
    fn test_reset_keeps_ledger() {
        let mut circuit = Circuit::new(&square_layout(), 0.0);
        circuit.update(&on_start(), 0.0);
        drive_lap(&mut circuit, 20.0);
        circuit.update(&on_gate(0), 21.0);
        circuit.reset(22.0);
        assert_eq!(circuit.checks(), &[false, false, false]);
        assert!(!circuit.is_started());
        assert_eq!(circuit.lap_time(30.0), 0.0);
        assert_eq!(circuit.times(), &[20.0]);
        assert_eq!(circuit.best_time(), 20.0);
        assert_eq!(circuit.latest(), Some(0));
    }

    #[test]
    fn test_penalty_advances_lap_clock() {
        let mut circuit = Circuit::new(&square_layout(), 0.0);
        circuit.update(&on_start(), 1.0);
        for _ in 0..10 {
            circuit.apply_out_of_bounds_penalty();
        }
        assert!((circuit.lap_time(2.0) - 1.01).abs() < 1e-9);
    }

    #[test]
    fn test_contains_body_on_track() {
        let circuit = Circuit::new(&square_layout(), 0.0);
        assert!(circuit.contains_body(&clear()));
        assert!(circuit.contains_body(&on_gate(1)));
    }

    #[test]
    fn test_contains_body_outside_and_infield() {
        let circuit = Circuit::new(&square_layout(), 0.0);
        assert!(!circuit.contains_body(&body_at(400.0, 160.0)));
        assert!(!circuit.contains_body(&body_at(150.0, 150.0)));
        // Half over the outer edge
        assert!(!circuit.contains_body(&body_at(300.0, 160.0)));
    }

    #[test]
    fn test_stock_circuit_spawn_in_bounds() {
        let circuit = Circuit::new(&TrackLayout::default(), 0.0);
        let body = Body::default();
        assert!(circuit.contains_body(&body));
        // Fully outside the outer polygon, bottom-right corner of the world
        let outside = Body::new(Vec2::new(1270.0 - CAR_WIDTH, 720.0 - CAR_HEIGHT));
        for corner in outside.corners() {
            assert!(!crate::sim::boundary::point_in_bounds(
                circuit.parity_origin(),
                corner,
                &circuit.walls()
            ));
        }
        assert!(!circuit.contains_body(&outside));
    }
}
