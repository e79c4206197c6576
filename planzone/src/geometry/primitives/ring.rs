use anyhow::{Result, ensure};

use crate::geometry::primitives::Point;

/// Signed shoelace area of a closed ring of points.
/// Counterclockwise = positive, clockwise = negative. 0.0 for fewer than 3 points.
//https://en.wikipedia.org/wiki/Shoelace_formula
pub fn shoelace_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sigma = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        let Point(x_i, y_i) = points[i];
        let Point(x_j, y_j) = points[j];
        sigma += x_i * y_j - x_j * y_i;
    }
    0.5 * sigma
}

/// An ordered sequence of ≥3 vertices forming a closed ring (edges wrap last→first).
/// Vertex order is significant. Self-touching rings (the output of hole-bridging)
/// and duplicate vertices are legal, unlike a strictly simple polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        ensure!(
            points.len() >= 3,
            "a ring requires at least 3 points, got {}",
            points.len()
        );
        Ok(Ring { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn n_vertices(&self) -> usize {
        self.points.len()
    }

    pub fn signed_area(&self) -> f64 {
        shoelace_area(&self.points)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn perimeter(&self) -> f64 {
        self.edge_iter().map(|(a, b)| a.distance(b)).sum()
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}
