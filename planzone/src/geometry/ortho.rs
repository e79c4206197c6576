use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, Ring};

const MAX_PASSES: usize = 3;
/// Turns below this are treated as collinear and their vertex dropped.
const COLLINEAR_TURN_DEG: f64 = 8.0;
/// Turns above this qualify a short-edged vertex as a spur/notch.
const SPUR_TURN_DEG: f64 = 30.0;
/// An edge is "short" when it is below this fraction of the ring's perimeter.
const SHORT_EDGE_FRAC: f64 = 0.03;

/// Configuration of the orthogonal-snap cleanup.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct OrthoConfig {
    /// Maximum deviation from the axis (in degrees) for an edge to be snapped
    /// horizontal or vertical.
    pub tolerance_deg: f64,
}

impl Default for OrthoConfig {
    fn default() -> Self {
        OrthoConfig {
            tolerance_deg: 10.0,
        }
    }
}

/// Removes spurs and near-collinear vertices, then snaps near-axis edges to be
/// exactly horizontal or vertical, for up to 3 passes.
///
/// A pass that would reduce the ring below 3 vertices is aborted and the
/// pre-pass ring returned.
pub fn ortho_clean(ring: &Ring, config: OrthoConfig) -> Ring {
    let mut points = ring.points().to_vec();
    for pass in 0..MAX_PASSES {
        let stripped = strip_spurs(&points);
        if stripped.len() < 3 {
            debug!("[ORTHO] pass {pass} would degenerate the ring, reverting");
            break;
        }
        let snapped = snap_axis_edges(stripped, config.tolerance_deg);
        if snapped == points {
            break; //converged
        }
        points = snapped;
    }
    Ring::new(points).expect("cleanup never commits a ring below 3 vertices")
}

fn strip_spurs(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    let perimeter: f64 = (0..n)
        .map(|i| points[i].distance(points[(i + 1) % n]))
        .sum();
    let short_edge = SHORT_EDGE_FRAC * perimeter;

    let mut kept = Vec::with_capacity(n);
    for i in 0..n {
        let p = points[(i + n - 1) % n];
        let c = points[i];
        let q = points[(i + 1) % n];

        let turn = turn_angle_deg(p, c, q);
        let near_collinear = turn < COLLINEAR_TURN_DEG;
        let spur = p.distance(c) < short_edge && c.distance(q) < short_edge && turn > SPUR_TURN_DEG;

        if !(near_collinear || spur) {
            kept.push(c);
        }
    }
    kept
}

/// Absolute change of direction (degrees, in `[0, 180]`) between the incoming
/// and outgoing edge of vertex `c`.
fn turn_angle_deg(p: Point, c: Point, q: Point) -> f64 {
    let incoming = (c.1 - p.1).atan2(c.0 - p.0);
    let outgoing = (q.1 - c.1).atan2(q.0 - c.0);
    let mut turn = (outgoing - incoming).to_degrees().abs();
    if turn > 180.0 {
        turn = 360.0 - turn;
    }
    turn
}

fn snap_axis_edges(mut points: Vec<Point>, tolerance_deg: f64) -> Vec<Point> {
    let n = points.len();
    for i in 0..n {
        let j = (i + 1) % n;
        let (a, b) = (points[i], points[j]);
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        if dx == 0.0 && dy == 0.0 {
            continue;
        }

        let angle = dy.atan2(dx).to_degrees();
        let from_horizontal = f64::min(angle.abs(), 180.0 - angle.abs());
        let from_vertical = (90.0 - angle.abs()).abs();

        if from_horizontal <= tolerance_deg {
            let mid_y = (a.1 + b.1) / 2.0;
            points[i].1 = mid_y;
            points[j].1 = mid_y;
        } else if from_vertical <= tolerance_deg {
            let mid_x = (a.0 + b.0) / 2.0;
            points[i].0 = mid_x;
            points[j].0 = mid_x;
        }
    }
    points
}
