use serde::{Deserialize, Serialize};

use crate::entities::ZoneKind;

/// External representation of a [`Zone`](crate::entities::Zone), serialized by
/// the external persistence layer in whatever format it chooses.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtZone {
    /// Opaque unique identifier of the zone
    pub id: u64,
    /// Owning floor plan
    pub floor_plan_id: u64,
    pub kind: ZoneKind,
    /// Ring vertices in normalized floor-plan space, ≥3, order significant
    pub points: Vec<(f64, f64)>,
    /// Real-world area derived from the floor boundary zone, 0.0 if unknown
    pub estimated_area: f64,
    pub color: String,
    pub opacity: f64,
    pub name: String,
    /// Association to an external leasing unit
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub linked_unit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label_offset: Option<(f64, f64)>,
    /// Audit metadata, not geometry-relevant
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub modified_at: Option<String>,
}

/// External representation of one floor plan's zone collection.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtPlan {
    pub id: u64,
    /// Known real-world area of the floor
    pub floor_area: f64,
    #[serde(default)]
    pub zones: Vec<ExtZone>,
}
