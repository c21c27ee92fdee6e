//! Point types for each frame. Plain `Copy` values; no invariants are
//! enforced at construction (conversions canonicalize their outputs).

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Earth-centered, Earth-fixed Cartesian position, meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Er0Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Er0Point {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
    #[inline]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for Er0Point {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Angular ring position.
///
/// - `theta`: radians, 0 at the Kongo Hub, increasing eastward, `[-π, π)`.
/// - `r`: signed radial offset from the centerline (positive away from Earth).
/// - `z`: vertical offset from the equatorial plane (positive north).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RingPolar {
    pub theta: f64,
    pub r: f64,
    pub z: f64,
}

impl RingPolar {
    #[inline]
    pub fn new(theta: f64, r: f64, z: f64) -> Self {
        Self { theta, r, z }
    }
}

/// Arc-length ring position. `s` is meters along the centerline in `[0, C)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RingArc {
    pub s: f64,
    pub r: f64,
    pub z: f64,
}

impl RingArc {
    #[inline]
    pub fn new(s: f64, r: f64, z: f64) -> Self {
        Self { s, r, z }
    }
}

/// Legacy linear position: `x` arc length, `y` width offset, `z` floor.
///
/// `z` counts floors, not meters. Legacy records hold whole floors; use
/// [`LegacyPoint::floor`] for the integer index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LegacyPoint {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
    /// Position on a whole floor.
    #[inline]
    pub fn on_floor(x: f64, y: f64, floor: i32) -> Self {
        Self::new(x, y, f64::from(floor))
    }
    /// Nearest integer floor index (saturating for out-of-range values).
    #[inline]
    pub fn floor(&self) -> i32 {
        self.z.round() as i32
    }
}

/// Rendering-engine position: `x` along the ring, `y` up, `z` radial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnginePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EnginePoint {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
    #[inline]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}
