use std::cmp::Reverse;

use anyhow::Result;
use log::{info, warn};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::geometry::convex_hull::convex_hull_from_points;
use crate::geometry::coord::Camera;
use crate::geometry::ortho::{OrthoConfig, ortho_clean};
use crate::geometry::primitives::{Point, Ring};
use crate::geometry::simplification::{SimplifyConfig, reduce_vertices};

/// Raw machine-detected ring in pixel space, tagged with its pixel area.
#[derive(Clone, Debug)]
pub struct RawContour {
    pub points: Vec<Point>,
    pub pixel_area: f64,
}

/// Transient ring in normalized space, post-processed but not yet materialized
/// as a zone.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectedContour {
    pub ring: Ring,
    pub normalized_area: f64,
}

/// The external contour-detection collaborator. Image handling is out of
/// scope; a failing collaborator is reported as "no contours found", never as
/// a fault.
pub trait ContourDetector {
    fn detect(&mut self) -> Result<Vec<RawContour>>;
}

/// Tuning of the contour post-processing pipeline.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PostProcessConfig {
    pub simplify: bool,
    pub simplify_config: SimplifyConfig,
    pub ortho_snap: bool,
    pub ortho_config: OrthoConfig,
    pub convex_hull: bool,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        PostProcessConfig {
            simplify: true,
            simplify_config: SimplifyConfig::default(),
            ortho_snap: true,
            ortho_config: OrthoConfig::default(),
            convex_hull: false,
        }
    }
}

/// Invokes the collaborator once and post-processes its output.
/// A collaborator error or an empty detection both yield an empty candidate set.
pub fn run_detection(
    detector: &mut dyn ContourDetector,
    image_w: f64,
    image_h: f64,
    config: &PostProcessConfig,
) -> Vec<DetectedContour> {
    let raw = match detector.detect() {
        Ok(raw) => raw,
        Err(err) => {
            warn!("[DETECT] collaborator failed, treating as no contours found: {err}");
            return vec![];
        }
    };
    if raw.is_empty() {
        warn!("[DETECT] no contours found");
        return vec![];
    }
    post_process(raw, image_w, image_h, config)
}

/// Converts raw pixel-space rings to normalized space and runs simplification,
/// ortho-snap and convex hull over each, in that fixed order, as enabled by
/// `config`. A stage that would leave a ring below 3 points reverts to the
/// pre-stage ring. Candidates are sorted by descending normalized area.
pub fn post_process(
    raw: Vec<RawContour>,
    image_w: f64,
    image_h: f64,
    config: &PostProcessConfig,
) -> Vec<DetectedContour> {
    let camera = Camera::new(image_w, image_h);

    let mut candidates: Vec<DetectedContour> = raw
        .into_iter()
        .filter_map(|contour| {
            let normalized: Vec<Point> = contour
                .points
                .iter()
                .map(|p| camera.to_normalized(p.0, p.1))
                .collect();
            let mut ring = Ring::new(normalized).ok()?;

            if config.simplify {
                ring = reduce_vertices(&ring, config.simplify_config);
            }
            if config.ortho_snap {
                ring = ortho_clean(&ring, config.ortho_config);
            }
            if config.convex_hull {
                let hull = convex_hull_from_points(ring.points().to_vec());
                if let Ok(hull_ring) = Ring::new(hull) {
                    ring = hull_ring;
                }
            }

            let normalized_area = ring.area();
            Some(DetectedContour {
                ring,
                normalized_area,
            })
        })
        .collect();

    candidates.sort_by_key(|c| Reverse(OrderedFloat(c.normalized_area)));
    info!("[DETECT] {} contour candidate(s) post-processed", candidates.len());
    candidates
}
