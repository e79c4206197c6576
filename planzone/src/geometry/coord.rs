use float_cmp::approx_eq;
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

/// Affine mapping between the pixel space of the floor image (under zoom and pan)
/// and normalized floor-plan space.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub image_w: f64,
    pub image_h: f64,
    pub zoom: f64,
    pub pan: (f64, f64),
}

impl Camera {
    /// Camera over an unzoomed, unpanned image.
    pub fn new(image_w: f64, image_h: f64) -> Self {
        Camera {
            image_w,
            image_h,
            zoom: 1.0,
            pan: (0.0, 0.0),
        }
    }

    fn image_loaded(&self) -> bool {
        self.image_w > 0.0 && self.image_h > 0.0
    }

    /// Maps a pixel coordinate to normalized space.
    /// A camera without a loaded image maps everything to the origin.
    pub fn to_normalized(&self, px: f64, py: f64) -> Point {
        if !self.image_loaded() {
            return Point(0.0, 0.0);
        }
        Point(
            (px - self.pan.0) / (self.zoom * self.image_w),
            (py - self.pan.1) / (self.zoom * self.image_h),
        )
    }

    /// Inverse of [`Self::to_normalized`].
    pub fn to_pixel(&self, p: Point) -> (f64, f64) {
        if !self.image_loaded() {
            return (0.0, 0.0);
        }
        (
            p.0 * self.zoom * self.image_w + self.pan.0,
            p.1 * self.zoom * self.image_h + self.pan.1,
        )
    }
}

/// Real-world area of a polygon, derived by scaling its normalized area against
/// the floor boundary's normalized area and the floor's known real area.
/// Returns 0.0 when no usable boundary reference exists ("unknown", not an error).
pub fn estimated_real_area(
    norm_area: f64,
    boundary_norm_area: f64,
    floor_real_area: f64,
) -> f64 {
    if approx_eq!(f64, boundary_norm_area, 0.0, epsilon = 1e-12) || boundary_norm_area < 0.0 {
        return 0.0;
    }
    (norm_area / boundary_norm_area) * floor_real_area
}
