pub mod boolean;
pub mod convex_hull;
pub mod coord;
pub mod ortho;
pub mod primitives;
pub mod simplification;
