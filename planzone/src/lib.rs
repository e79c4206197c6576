//! Zone geometry and edit-history engine for floor-plan annotation.
//!
//! Maintains polygonal zones over a floor image in normalized coordinate space:
//! boolean set-operations with hole-bridging, area-weighted simplification,
//! orthogonal cleanup, convex hulls and a snapshot-based undo/redo timeline.
//! Rendering, image decoding and persistence are external collaborators.

/// Zone and floor-plan entities
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Snapshot-based undo/redo over a floor plan's zone collection
pub mod history;

/// Post-processing pipeline for machine-detected contours
pub mod detection;

/// Importing and exporting floor plans through their external representation
pub mod io;
