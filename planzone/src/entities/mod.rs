mod plan;
mod zone;

use slotmap::new_key_type;

new_key_type! {
    /// Unique key of a [`Zone`] within its [`Plan`]. Stable across edits;
    /// boolean operations replace zones under new keys rather than mutating
    /// geometry in place.
    pub struct ZoneKey;
}

#[doc(inline)]
pub use plan::{BooleanOutcome, Plan, PlanSnapshot, ZoneEvent};
#[doc(inline)]
pub use zone::{UnitId, Zone, ZoneKind, ZoneStyle};
