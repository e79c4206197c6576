use std::slice;

use anyhow::{Result, anyhow, ensure};
use itertools::Itertools;
use log::info;
use slotmap::SlotMap;

use crate::detection::DetectedContour;
use crate::entities::{Zone, ZoneKey, ZoneKind};
use crate::geometry::boolean::{
    Advisory, BooleanOp, ClippedPolygon, PolygonClipper, bridged_rings, difference_of, fragment,
    intersect_all, union_all,
};
use crate::geometry::convex_hull::convex_hull_from_points;
use crate::geometry::coord::estimated_real_area;
use crate::geometry::primitives::{Point, Ring};

/// Change to the live zone collection, to be forwarded to the external
/// persistence layer as its `saveZone`/`deleteZone` callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneEvent {
    Saved(ZoneKey),
    Deleted(ZoneKey),
}

/// Outcome of a boolean operation: either the collection was rewritten, or an
/// advisory explains why nothing happened.
#[derive(Clone, Debug, PartialEq)]
pub enum BooleanOutcome {
    Applied {
        deleted: Vec<ZoneKey>,
        created: Vec<ZoneKey>,
    },
    Advisory(Advisory),
}

/// Deep copy of a [`Plan`]'s zone collection at one point in edit history.
#[derive(Clone, Debug)]
pub struct PlanSnapshot {
    pub zones: SlotMap<ZoneKey, Zone>,
}

impl PlanSnapshot {
    /// Structural equality against a live zone collection.
    pub fn matches(&self, zones: &SlotMap<ZoneKey, Zone>) -> bool {
        self.zones.len() == zones.len()
            && self.zones.iter().all(|(k, z)| zones.get(k) == Some(z))
    }
}

/// The zone collection of one floor plan: the single logical resource all
/// geometry and history operations act upon.
#[derive(Clone, Debug)]
pub struct Plan {
    pub id: u64,
    /// Known real-world area of the floor, the reference for area estimation.
    pub floor_area: f64,
    zones: SlotMap<ZoneKey, Zone>,
    events: Vec<ZoneEvent>,
}

impl Plan {
    pub fn new(id: u64, floor_area: f64) -> Self {
        Plan {
            id,
            floor_area,
            zones: SlotMap::with_key(),
            events: vec![],
        }
    }

    pub fn zones(&self) -> &SlotMap<ZoneKey, Zone> {
        &self.zones
    }

    pub fn zone(&self, key: ZoneKey) -> Option<&Zone> {
        self.zones.get(key)
    }

    pub fn n_zones(&self) -> usize {
        self.zones.len()
    }

    /// The FLOOR_BOUNDARY zone, if one exists.
    pub fn boundary(&self) -> Option<(ZoneKey, &Zone)> {
        self.zones
            .iter()
            .find(|(_, z)| z.kind == ZoneKind::FloorBoundary)
    }

    /// Pending persistence callbacks since the last drain.
    pub fn drain_events(&mut self) -> Vec<ZoneEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn add_zone(&mut self, zone: Zone) -> ZoneKey {
        let key = self.zones.insert(zone);
        self.events.push(ZoneEvent::Saved(key));
        self.refresh_estimated_areas();
        key
    }

    pub fn remove_zone(&mut self, key: ZoneKey) -> Option<Zone> {
        let removed = self.zones.remove(key);
        if removed.is_some() {
            self.events.push(ZoneEvent::Deleted(key));
            self.refresh_estimated_areas();
        }
        removed
    }

    /// Applies a boolean operation to `selection` (≥2 zones, first = base).
    ///
    /// On success the source zones are deleted and the result zones inserted as
    /// one atomic unit. Empty intersection/difference/fragment results return
    /// an [`Advisory`] and leave the originals untouched.
    pub fn apply_boolean(
        &mut self,
        clipper: &dyn PolygonClipper,
        op: BooleanOp,
        selection: &[ZoneKey],
    ) -> Result<BooleanOutcome> {
        ensure!(
            selection.len() >= 2,
            "boolean operations require at least 2 zones, got {}",
            selection.len()
        );
        ensure!(
            selection.iter().all_unique(),
            "boolean operation selection contains duplicate zones"
        );

        let mut names = Vec::with_capacity(selection.len());
        let mut inputs = Vec::with_capacity(selection.len());
        for &key in selection {
            let zone = self
                .zones
                .get(key)
                .ok_or_else(|| anyhow!("zone {key:?} does not belong to this plan"))?;
            names.push(zone.name.clone());
            inputs.push(ClippedPolygon::from_ring(&zone.ring));
        }
        let base = &self.zones[selection[0]];
        let (base_style, base_kind) = (base.style.clone(), base.kind);

        let seeds: Vec<(String, Ring)> = match op {
            BooleanOp::Union => {
                let rings = bridged_rings(union_all(clipper, &inputs));
                if rings.is_empty() {
                    return Ok(BooleanOutcome::Advisory(Advisory::NoPositiveArea));
                }
                name_pieces(&names.iter().join(" + "), rings)
            }
            BooleanOp::Intersection => {
                let rings = bridged_rings(intersect_all(clipper, &inputs));
                if rings.is_empty() {
                    return Ok(BooleanOutcome::Advisory(Advisory::NoOverlap));
                }
                name_pieces(&names.iter().join(" ∩ "), rings)
            }
            BooleanOp::Difference => {
                let rings = bridged_rings(difference_of(
                    clipper,
                    slice::from_ref(&inputs[0]),
                    &inputs[1..],
                ));
                if rings.is_empty() {
                    return Ok(BooleanOutcome::Advisory(Advisory::NothingToSubtract));
                }
                name_pieces(&names.iter().join(" − "), rings)
            }
            BooleanOp::ConvexHullOfAll => {
                let hull = convex_hull_from_points(concat_vertices(&inputs));
                vec![(names.iter().join(" + "), Ring::new(hull)?)]
            }
            BooleanOp::KeepAllPoints => {
                vec![(names.iter().join(" + "), Ring::new(concat_vertices(&inputs))?)]
            }
            BooleanOp::Fragment => {
                let pieces = fragment(clipper, &inputs);
                let mut seeds = vec![];
                for (i, remainder) in pieces.remainders {
                    seeds.extend(name_pieces(&names[i], bridged_rings(remainder)));
                }
                for ((i, j), shared) in pieces.intersections {
                    let name = format!("{} ∩ {}", names[i], names[j]);
                    seeds.extend(name_pieces(&name, bridged_rings(shared)));
                }
                if seeds.is_empty() {
                    return Ok(BooleanOutcome::Advisory(Advisory::NoPositiveArea));
                }
                seeds
            }
        };

        //sources are deleted and results inserted as a unit, never a partial mix
        let deleted = selection.to_vec();
        for &key in selection {
            self.zones.remove(key);
            self.events.push(ZoneEvent::Deleted(key));
        }
        let created: Vec<ZoneKey> = seeds
            .into_iter()
            .map(|(name, ring)| {
                let mut zone = Zone::new(ring, base_kind, name);
                zone.style = base_style.clone();
                let key = self.zones.insert(zone);
                self.events.push(ZoneEvent::Saved(key));
                key
            })
            .collect();
        self.refresh_estimated_areas();

        info!(
            "[PLAN] applied {op:?}: {} source zone(s) replaced by {} result zone(s)",
            deleted.len(),
            created.len()
        );
        Ok(BooleanOutcome::Applied { deleted, created })
    }

    /// Materializes post-processed contours as zones. The first contour becomes
    /// the FLOOR_BOUNDARY zone if none exists yet; all others become planned
    /// zones with areas estimated relative to that boundary.
    ///
    /// `index` restricts materialization to a single contour of the candidate set.
    pub fn apply_detected_contours(
        &mut self,
        contours: &[DetectedContour],
        index: Option<usize>,
    ) -> Vec<ZoneKey> {
        let selected: Vec<&DetectedContour> = match index {
            Some(i) => contours.get(i).into_iter().collect(),
            None => contours.iter().collect(),
        };

        let mut created = Vec::with_capacity(selected.len());
        for contour in selected {
            let (kind, name) = if self.boundary().is_none() {
                (ZoneKind::FloorBoundary, "Floor boundary".to_string())
            } else {
                (ZoneKind::Planned, format!("Zone {}", self.n_zones() + 1))
            };
            created.push(self.add_zone(Zone::new(contour.ring.clone(), kind, name)));
        }
        created
    }

    /// Snapshot of the current zone collection.
    pub fn save(&self) -> PlanSnapshot {
        PlanSnapshot {
            zones: self.zones.clone(),
        }
    }

    /// Rewrites the zone collection to a snapshot: every current zone is
    /// deleted and every snapshot zone re-created, surfacing the full rewrite
    /// to the persistence layer.
    pub fn restore(&mut self, snapshot: &PlanSnapshot) {
        let old_keys: Vec<ZoneKey> = self.zones.keys().collect();
        for key in old_keys {
            self.events.push(ZoneEvent::Deleted(key));
        }
        self.zones = snapshot.zones.clone();
        for key in self.zones.keys() {
            self.events.push(ZoneEvent::Saved(key));
        }
    }

    fn refresh_estimated_areas(&mut self) {
        let floor_area = self.floor_area;
        let boundary_area = self.boundary().map(|(_, z)| z.ring.area()).unwrap_or(0.0);
        for (_, zone) in self.zones.iter_mut() {
            zone.estimated_area = match zone.kind {
                ZoneKind::FloorBoundary => floor_area,
                _ => estimated_real_area(zone.ring.area(), boundary_area, floor_area),
            };
        }
    }
}

fn concat_vertices(inputs: &[ClippedPolygon]) -> Vec<Point> {
    inputs.iter().flat_map(|cp| cp.outer.iter().copied()).collect()
}

fn name_pieces(name: &str, rings: Vec<Ring>) -> Vec<(String, Ring)> {
    let disjoint = rings.len() > 1;
    rings
        .into_iter()
        .enumerate()
        .map(|(i, ring)| {
            let piece_name = match disjoint {
                true => format!("{name} ({})", i + 1),
                false => name.to_string(),
            };
            (piece_name, ring)
        })
        .collect()
}
