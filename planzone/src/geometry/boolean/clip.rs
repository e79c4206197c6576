use geo::BooleanOps;
use geo_types::{Coord, LineString, MultiPolygon, Polygon};

use crate::geometry::primitives::{Point, Ring, shoelace_area};

/// A clipping operand or result: one outer boundary with zero or more holes.
#[derive(Clone, Debug, PartialEq)]
pub struct ClippedPolygon {
    pub outer: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
}

impl ClippedPolygon {
    pub fn from_ring(ring: &Ring) -> Self {
        ClippedPolygon {
            outer: ring.points().to_vec(),
            holes: vec![],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClipOp {
    Union,
    Intersection,
    Difference,
}

/// Pluggable polygon-clipping capability. Operates on ring-sets and may return
/// 0, 1 or many disjoint result polygons, each possibly with holes. Any standard
/// clipping algorithm satisfies this contract.
pub trait PolygonClipper {
    fn clip(&self, op: ClipOp, a: &[ClippedPolygon], b: &[ClippedPolygon]) -> Vec<ClippedPolygon>;
}

/// [`PolygonClipper`] backed by the Martinez-Rueda boolean sweep of the
/// [`geo`] crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoClipper;

impl PolygonClipper for GeoClipper {
    fn clip(&self, op: ClipOp, a: &[ClippedPolygon], b: &[ClippedPolygon]) -> Vec<ClippedPolygon> {
        let (mp_a, mp_b) = (to_multi_polygon(a), to_multi_polygon(b));
        let result = match op {
            ClipOp::Union => mp_a.union(&mp_b),
            ClipOp::Intersection => mp_a.intersection(&mp_b),
            ClipOp::Difference => mp_a.difference(&mp_b),
        };
        result.into_iter().filter_map(from_geo_polygon).collect()
    }
}

fn to_multi_polygon(polygons: &[ClippedPolygon]) -> MultiPolygon<f64> {
    MultiPolygon(polygons.iter().map(to_geo_polygon).collect())
}

fn to_geo_polygon(cp: &ClippedPolygon) -> Polygon<f64> {
    //the sweep expects counterclockwise exteriors and clockwise interiors
    let exterior = oriented_line_string(&cp.outer, true);
    let interiors = cp
        .holes
        .iter()
        .map(|h| oriented_line_string(h, false))
        .collect();
    Polygon::new(exterior, interiors)
}

fn oriented_line_string(points: &[Point], ccw: bool) -> LineString<f64> {
    let mut coords: Vec<Coord<f64>> = points.iter().map(|p| Coord { x: p.0, y: p.1 }).collect();
    if (shoelace_area(points) < 0.0) == ccw {
        coords.reverse();
    }
    LineString(coords)
}

fn from_geo_polygon(poly: Polygon<f64>) -> Option<ClippedPolygon> {
    let outer = line_string_to_points(poly.exterior());
    if outer.len() < 3 {
        return None;
    }
    let holes = poly
        .interiors()
        .iter()
        .map(line_string_to_points)
        .filter(|h| h.len() >= 3)
        .collect();
    Some(ClippedPolygon { outer, holes })
}

fn line_string_to_points(ls: &LineString<f64>) -> Vec<Point> {
    let mut points: Vec<Point> = ls.coords().map(|c| Point(c.x, c.y)).collect();
    //geo closes its rings explicitly, pop the duplicated closing vertex
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}
