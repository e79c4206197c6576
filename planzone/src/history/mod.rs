use log::debug;

use crate::entities::{Plan, PlanSnapshot};

/// Maximum number of snapshots retained; the oldest is evicted beyond this.
pub const HISTORY_CAPACITY: usize = 50;

/// Re-entrancy guard of the history manager. While `Replaying`, observed
/// collection changes are the manager's own undo/redo rewrites and must not be
/// recorded as new edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HistoryMode {
    Recording,
    Replaying,
}

/// Snapshot-based undo/redo timeline over one floor plan's zone collection.
///
/// The timeline starts at the plan's state when it is opened. After every
/// external change [`History::observe`] appends a snapshot; [`History::undo`]
/// and [`History::redo`] walk the timeline and are inert at its boundaries.
pub struct History {
    snapshots: Vec<PlanSnapshot>,
    cursor: usize,
    mode: HistoryMode,
    capacity: usize,
}

impl History {
    pub fn new(plan: &Plan) -> Self {
        Self::with_capacity(plan, HISTORY_CAPACITY)
    }

    pub fn with_capacity(plan: &Plan, capacity: usize) -> Self {
        assert!(capacity >= 2, "history needs room for at least 2 snapshots");
        History {
            snapshots: vec![plan.save()],
            cursor: 0,
            mode: HistoryMode::Recording,
            capacity,
        }
    }

    /// Records a snapshot if the live collection differs from the snapshot at
    /// the cursor. Any discarded redo branch is truncated first. No-op while a
    /// replay is in progress.
    pub fn observe(&mut self, plan: &Plan) {
        if self.mode == HistoryMode::Replaying {
            return;
        }
        if self.snapshots[self.cursor].matches(plan.zones()) {
            return;
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(plan.save());
        self.cursor += 1;

        if self.snapshots.len() > self.capacity {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }
        debug!(
            "[HIST] snapshot {}/{} recorded",
            self.cursor + 1,
            self.snapshots.len()
        );
    }

    /// Rewrites the plan to the previous snapshot. Returns `false` (and does
    /// nothing) at the oldest snapshot.
    pub fn undo(&mut self, plan: &mut Plan) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.mode = HistoryMode::Replaying;
        self.cursor -= 1;
        plan.restore(&self.snapshots[self.cursor]);
        self.mode = HistoryMode::Recording;
        debug!("[HIST] undo to snapshot {}", self.cursor + 1);
        true
    }

    /// Rewrites the plan to the next snapshot. Returns `false` (and does
    /// nothing) at the newest snapshot.
    pub fn redo(&mut self, plan: &mut Plan) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.mode = HistoryMode::Replaying;
        self.cursor += 1;
        plan.restore(&self.snapshots[self.cursor]);
        self.mode = HistoryMode::Recording;
        debug!("[HIST] redo to snapshot {}", self.cursor + 1);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Replaces the whole timeline with the given plan's current state, for
    /// when the active floor plan changes.
    pub fn reset(&mut self, plan: &Plan) {
        self.snapshots = vec![plan.save()];
        self.cursor = 0;
        self.mode = HistoryMode::Recording;
    }

    pub fn n_snapshots(&self) -> usize {
        self.snapshots.len()
    }
}
