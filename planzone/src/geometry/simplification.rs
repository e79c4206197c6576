use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, Ring};

/// Configuration of the area-weighted vertex reduction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SimplifyConfig {
    /// Fraction of vertices to remove, in `[0, 1]`.
    pub reduction_ratio: f64,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        SimplifyConfig {
            reduction_ratio: 0.5,
        }
    }
}

/// Reduces a ring by repeatedly removing the vertex whose neighboring triangle
/// has the smallest area (Visvalingam-Whyatt family), until the ring reaches
/// `max(4, round(n · (1 − reduction_ratio)))` vertices.
///
/// When a vertex is removed its former neighbors' triangle areas are recomputed
/// and raised to at least the area just removed, so effective areas never jump
/// backward. A ring never drops below 4 vertices and the vertex count never
/// increases.
pub fn reduce_vertices(ring: &Ring, config: SimplifyConfig) -> Ring {
    let points = ring.points();
    let n = points.len();
    let target = usize::max(
        4,
        (n as f64 * (1.0 - config.reduction_ratio)).round() as usize,
    );
    if n <= 4 || target >= n {
        return ring.clone();
    }

    //doubly linked ring over vertex indices
    let mut prev: Vec<usize> = (0..n).map(|i| (i + n - 1) % n).collect();
    let mut next: Vec<usize> = (0..n).map(|i| (i + 1) % n).collect();
    let mut alive = vec![true; n];
    let mut weight: Vec<f64> = (0..n)
        .map(|i| triangle_area(points[prev[i]], points[i], points[next[i]]))
        .collect();

    let mut remaining = n;
    while remaining > target {
        let mut smallest: Option<usize> = None;
        for i in 0..n {
            if alive[i] && smallest.is_none_or(|s| weight[i] < weight[s]) {
                smallest = Some(i);
            }
        }
        let Some(i) = smallest else { break };

        let removed_weight = weight[i];
        alive[i] = false;
        remaining -= 1;

        let (p, q) = (prev[i], next[i]);
        next[p] = q;
        prev[q] = p;

        for j in [p, q] {
            let recomputed = triangle_area(points[prev[j]], points[j], points[next[j]]);
            weight[j] = recomputed.max(removed_weight);
        }
    }

    let survivors: Vec<Point> = (0..n).filter(|&i| alive[i]).map(|i| points[i]).collect();
    debug!(
        "[SIMPL] reduced ring from {} to {} vertices",
        n,
        survivors.len()
    );

    Ring::new(survivors).expect("reduction target is at least 4 vertices")
}

fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    ((b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)).abs() / 2.0
}
