use itertools::Itertools;
use ordered_float::OrderedFloat;

use super::clip::ClippedPolygon;
use crate::geometry::primitives::{Point, shoelace_area};

/// Collapses a polygon-with-holes into one continuous, self-touching ring.
///
/// For each hole the closest vertex pair between the accumulated boundary and
/// the hole (by squared distance) becomes a zero-width bridge seam: the
/// re-oriented hole is spliced into the boundary at that pair, with the bridge
/// vertex duplicated on each side. The seam is a visual artifact traded for a
/// hole-free zone representation; bridges crossing other edges are not guarded
/// against.
pub fn bridge_holes(clipped: ClippedPolygon) -> Vec<Point> {
    let ClippedPolygon { outer, holes } = clipped;

    let mut ring = outer;
    if shoelace_area(&ring) < 0.0 {
        ring.reverse();
    }
    for mut hole in holes {
        //winding opposite to the boundary keeps the spliced ring consistently oriented
        if shoelace_area(&hole) > 0.0 {
            hole.reverse();
        }
        ring = splice_hole(ring, &hole);
    }
    ring
}

fn splice_hole(ring: Vec<Point>, hole: &[Point]) -> Vec<Point> {
    let (i, j) = (0..ring.len())
        .cartesian_product(0..hole.len())
        .min_by_key(|&(i, j)| OrderedFloat(ring[i].sq_distance(hole[j])))
        .expect("boundary and hole are non-empty");

    let mut spliced = Vec::with_capacity(ring.len() + hole.len() + 2);
    spliced.extend_from_slice(&ring[..=i]);
    spliced.extend_from_slice(&hole[j..]);
    //hole[j] reappears: the bridge vertex is duplicated on the hole side
    spliced.extend_from_slice(&hole[..=j]);
    //ring[i] reappears: and on the boundary side
    spliced.extend_from_slice(&ring[i..]);
    spliced
}
