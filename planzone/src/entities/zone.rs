use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Ring;

/// Semantic kind of a zone. At most one zone per plan is conventionally
/// [`ZoneKind::FloorBoundary`]; it serves as the real-area reference.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneKind {
    FloorBoundary,
    Planned,
    Linked,
}

/// Presentation-only attributes, carried through geometry operations but
/// otherwise inert to the engine.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ZoneStyle {
    pub color: String,
    pub opacity: f64,
}

impl Default for ZoneStyle {
    fn default() -> Self {
        ZoneStyle {
            color: "#3b82f6".to_string(),
            opacity: 0.4,
        }
    }
}

/// Opaque reference to an external leasing unit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitId(pub String);

/// A polygonal region annotated on a floor plan.
///
/// Immutable-per-version value: every mutating operation produces a new `Zone`
/// (or zone set) instead of editing geometry in place, so history snapshots can
/// rely on structural equality.
#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub ring: Ring,
    pub kind: ZoneKind,
    pub name: String,
    pub style: ZoneStyle,
    /// Real-world area in the floor's unit, derived from the boundary zone.
    /// 0.0 while no boundary reference exists.
    pub estimated_area: f64,
    pub linked_unit: Option<UnitId>,
    /// Offset of the zone label relative to the zone, presentation only.
    pub label_offset: Option<(f64, f64)>,
}

impl Zone {
    pub fn new(ring: Ring, kind: ZoneKind, name: String) -> Self {
        Zone {
            ring,
            kind,
            name,
            style: ZoneStyle::default(),
            estimated_area: 0.0,
            linked_unit: None,
            label_offset: None,
        }
    }
}
