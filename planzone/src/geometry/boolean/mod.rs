use std::fmt;
use std::slice;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

mod bridge;
mod clip;

#[doc(inline)]
pub use bridge::bridge_holes;
#[doc(inline)]
pub use clip::{ClipOp, ClippedPolygon, GeoClipper, PolygonClipper};

use crate::geometry::primitives::{Ring, shoelace_area};

/// Result polygons with an area at or below this are considered degenerate and dropped.
pub const MIN_PIECE_AREA: f64 = 1e-12;

/// Boolean set-operation over a selection of ≥2 zones.
/// The first selected zone acts as the *base* zone.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BooleanOp {
    /// Union of all selected zones.
    Union,
    /// Common region of all selected zones.
    Intersection,
    /// Base zone minus the union of the other selected zones.
    Difference,
    /// Convex hull over the concatenated vertices of all selected zones.
    ConvexHullOfAll,
    /// Single ring made of the concatenated vertices of all selected zones.
    KeepAllPoints,
    /// Decomposition of all selected zones into mutually disjoint pieces.
    Fragment,
}

/// Non-fatal status: the operation had nothing meaningful to do.
/// The original zones are left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// Intersection of zones that do not overlap.
    NoOverlap,
    /// Difference that would erase the base zone entirely.
    NothingToSubtract,
    /// Fragmentation in which no piece has positive area.
    NoPositiveArea,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NoOverlap => write!(f, "the selected zones do not overlap"),
            Advisory::NothingToSubtract => write!(f, "nothing would remain of the base zone"),
            Advisory::NoPositiveArea => write!(f, "no fragment has positive area"),
        }
    }
}

/// Folds a set of polygons into their union, one operand at a time.
pub fn union_all(clipper: &dyn PolygonClipper, inputs: &[ClippedPolygon]) -> Vec<ClippedPolygon> {
    match inputs.split_first() {
        None => vec![],
        Some((first, rest)) => rest.iter().fold(vec![first.clone()], |acc, next| {
            clipper.clip(ClipOp::Union, &acc, slice::from_ref(next))
        }),
    }
}

/// Folds a set of polygons into their common region. Empty when any fold step empties out.
pub fn intersect_all(
    clipper: &dyn PolygonClipper,
    inputs: &[ClippedPolygon],
) -> Vec<ClippedPolygon> {
    let Some((first, rest)) = inputs.split_first() else {
        return vec![];
    };
    let mut acc = vec![first.clone()];
    for next in rest {
        acc = clipper.clip(ClipOp::Intersection, &acc, slice::from_ref(next));
        if acc.is_empty() {
            break;
        }
    }
    acc
}

/// `base − union(others)`.
pub fn difference_of(
    clipper: &dyn PolygonClipper,
    base: &[ClippedPolygon],
    others: &[ClippedPolygon],
) -> Vec<ClippedPolygon> {
    let union_of_others = union_all(clipper, others);
    if union_of_others.is_empty() {
        return base.to_vec();
    }
    clipper.clip(ClipOp::Difference, base, &union_of_others)
}

/// Disjoint decomposition of `inputs`: the exclusive remainder of every polygon
/// against the union of all others, plus the pairwise intersection of every
/// unordered pair.
pub struct FragmentPieces {
    pub remainders: Vec<(usize, Vec<ClippedPolygon>)>,
    pub intersections: Vec<((usize, usize), Vec<ClippedPolygon>)>,
}

pub fn fragment(clipper: &dyn PolygonClipper, inputs: &[ClippedPolygon]) -> FragmentPieces {
    let mut remainders = vec![];
    for i in 0..inputs.len() {
        let others: Vec<ClippedPolygon> = inputs
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, cp)| cp.clone())
            .collect();
        let remainder = difference_of(clipper, slice::from_ref(&inputs[i]), &others);
        remainders.push((i, remainder));
    }

    let mut intersections = vec![];
    for (i, j) in (0..inputs.len()).tuple_combinations() {
        let shared = clipper.clip(
            ClipOp::Intersection,
            slice::from_ref(&inputs[i]),
            slice::from_ref(&inputs[j]),
        );
        intersections.push(((i, j), shared));
    }

    FragmentPieces {
        remainders,
        intersections,
    }
}

/// Bridges every result polygon into a single hole-free ring, dropping
/// degenerate pieces. A polygon-with-holes is never materialized as a zone.
pub fn bridged_rings(pieces: Vec<ClippedPolygon>) -> Vec<Ring> {
    pieces
        .into_iter()
        .map(bridge_holes)
        .filter(|pts| shoelace_area(pts).abs() > MIN_PIECE_AREA)
        .filter_map(|pts| Ring::new(pts).ok())
        .collect()
}
