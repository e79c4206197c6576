pub mod ext_repr;

use anyhow::{Context, Result};
use slotmap::Key;

use crate::entities::{Plan, UnitId, Zone, ZoneStyle};
use crate::geometry::primitives::{Point, Ring};
use crate::io::ext_repr::{ExtPlan, ExtZone};

/// Builds a [`Plan`] from its external representation.
///
/// Zone identity is reassigned on import; external ids are opaque and owned by
/// the persistence layer. Rings below 3 points are rejected; opacity is
/// clamped to `[0, 1]`.
pub fn import_plan(ext: &ExtPlan) -> Result<Plan> {
    let mut plan = Plan::new(ext.id, ext.floor_area);
    for ext_zone in &ext.zones {
        let points: Vec<Point> = ext_zone.points.iter().map(|&(x, y)| Point(x, y)).collect();
        let ring = Ring::new(points)
            .with_context(|| format!("zone '{}' has an invalid ring", ext_zone.name))?;

        let mut zone = Zone::new(ring, ext_zone.kind, ext_zone.name.clone());
        zone.style = ZoneStyle {
            color: ext_zone.color.clone(),
            opacity: ext_zone.opacity.clamp(0.0, 1.0),
        };
        zone.linked_unit = ext_zone.linked_unit_id.clone().map(UnitId);
        zone.label_offset = ext_zone.label_offset;
        plan.add_zone(zone);
    }
    //imported state is the persisted state, nothing is pending
    plan.drain_events();
    Ok(plan)
}

pub fn export_plan(plan: &Plan) -> ExtPlan {
    let zones = plan
        .zones()
        .iter()
        .map(|(key, zone)| ExtZone {
            id: key.data().as_ffi(),
            floor_plan_id: plan.id,
            kind: zone.kind,
            points: zone.ring.points().iter().map(|p| (p.0, p.1)).collect(),
            estimated_area: zone.estimated_area,
            color: zone.style.color.clone(),
            opacity: zone.style.opacity,
            name: zone.name.clone(),
            linked_unit_id: zone.linked_unit.as_ref().map(|u| u.0.clone()),
            label_offset: zone.label_offset,
            modified_at: None,
        })
        .collect();

    ExtPlan {
        id: plan.id,
        floor_area: plan.floor_area,
        zones,
    }
}
