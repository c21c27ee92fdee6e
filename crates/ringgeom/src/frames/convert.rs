//! Pairwise frame conversions and their chained composites.
//!
//! Pairs (forward/inverse)
//! - RingPolar ↔ ER0
//! - RingArc ↔ RingPolar
//! - LegacyPoint ↔ RingPolar
//! - RingArc ↔ EnginePoint (floor height is explicit)
//!
//! Everything else is a chain through these pairs.

use std::f64::consts::TAU;

use crate::cfg::{DEFAULT_FLOOR_HEIGHT, RING_CIRCUMFERENCE, RING_ORBITAL_RADIUS};
use crate::viewer::camera_offset;
use crate::wrap::{wrap_arc_length, wrap_theta};

use super::types::{EnginePoint, Er0Point, LegacyPoint, RingArc, RingPolar};

// ---------------------------------------------------------------------------
// RingPolar ↔ ER0
// ---------------------------------------------------------------------------

/// `R = R_ring + r; x = R cos θ; y = R sin θ; z = z`.
pub fn ring_polar_to_er0(p: RingPolar) -> Er0Point {
    let big_r = RING_ORBITAL_RADIUS + p.r;
    Er0Point {
        x: big_r * p.theta.cos(),
        y: big_r * p.theta.sin(),
        z: p.z,
    }
}

/// Inverse of [`ring_polar_to_er0`].
///
/// On the rotation axis (`x = y = 0`) `atan2(0, 0)` is taken as `0`: the
/// point maps to the Kongo Hub meridian with `r = -R_ring`.
pub fn er0_to_ring_polar(e: Er0Point) -> RingPolar {
    // sqrt is correctly rounded everywhere; hypot is not guaranteed to be.
    let big_r = (e.x * e.x + e.y * e.y).sqrt();
    RingPolar {
        theta: wrap_theta(e.y.atan2(e.x)),
        r: big_r - RING_ORBITAL_RADIUS,
        z: e.z,
    }
}

// ---------------------------------------------------------------------------
// RingArc ↔ RingPolar
// ---------------------------------------------------------------------------

/// `θ = wrap(2π s / C)`. Negative `s` keeps its sign until the wrap.
pub fn ring_arc_to_ring_polar(a: RingArc) -> RingPolar {
    RingPolar {
        theta: wrap_theta(TAU * a.s / RING_CIRCUMFERENCE),
        r: a.r,
        z: a.z,
    }
}

/// `s = wrap(C θ / 2π)`.
pub fn ring_polar_to_ring_arc(p: RingPolar) -> RingArc {
    RingArc {
        s: wrap_arc_length(RING_CIRCUMFERENCE * p.theta / TAU),
        r: p.r,
        z: p.z,
    }
}

// ---------------------------------------------------------------------------
// LegacyPoint ↔ RingPolar
// ---------------------------------------------------------------------------

/// Legacy `x` is arc length, `y` is `r`, `z` is copied as-is.
pub fn legacy_to_ring_polar(l: LegacyPoint) -> RingPolar {
    RingPolar {
        theta: wrap_theta(TAU * l.x / RING_CIRCUMFERENCE),
        r: l.y,
        z: l.z,
    }
}

/// Inverse of [`legacy_to_ring_polar`].
pub fn ring_polar_to_legacy(p: RingPolar) -> LegacyPoint {
    LegacyPoint {
        x: wrap_arc_length(RING_CIRCUMFERENCE * p.theta / TAU),
        y: p.r,
        z: p.z,
    }
}

// ---------------------------------------------------------------------------
// RingArc ↔ EnginePoint
// ---------------------------------------------------------------------------

/// `x = s, y = z · floor_height, z = r`.
pub fn ring_arc_to_engine(a: RingArc, floor_height: f64) -> EnginePoint {
    EnginePoint {
        x: wrap_arc_length(a.s),
        y: a.z * floor_height,
        z: a.r,
    }
}

/// Inverse of [`ring_arc_to_engine`]; `x` is wrapped back onto the ring.
pub fn engine_to_ring_arc(e: EnginePoint, floor_height: f64) -> RingArc {
    RingArc {
        s: wrap_arc_length(e.x),
        r: e.z,
        z: e.y / floor_height,
    }
}

// ---------------------------------------------------------------------------
// Chains
// ---------------------------------------------------------------------------

pub fn er0_to_ring_arc(e: Er0Point) -> RingArc {
    ring_polar_to_ring_arc(er0_to_ring_polar(e))
}

pub fn ring_arc_to_er0(a: RingArc) -> Er0Point {
    ring_polar_to_er0(ring_arc_to_ring_polar(a))
}

pub fn legacy_to_ring_arc(l: LegacyPoint) -> RingArc {
    ring_polar_to_ring_arc(legacy_to_ring_polar(l))
}

pub fn ring_arc_to_legacy(a: RingArc) -> LegacyPoint {
    ring_polar_to_legacy(ring_arc_to_ring_polar(a))
}

pub fn ring_polar_to_engine(p: RingPolar, floor_height: f64) -> EnginePoint {
    ring_arc_to_engine(ring_polar_to_ring_arc(p), floor_height)
}

pub fn engine_to_ring_polar(e: EnginePoint, floor_height: f64) -> RingPolar {
    ring_arc_to_ring_polar(engine_to_ring_arc(e, floor_height))
}

pub fn er0_to_engine(e: Er0Point, floor_height: f64) -> EnginePoint {
    ring_arc_to_engine(er0_to_ring_arc(e), floor_height)
}

pub fn engine_to_er0(e: EnginePoint, floor_height: f64) -> Er0Point {
    ring_arc_to_er0(engine_to_ring_arc(e, floor_height))
}

pub fn legacy_to_engine(l: LegacyPoint, floor_height: f64) -> EnginePoint {
    ring_arc_to_engine(legacy_to_ring_arc(l), floor_height)
}

pub fn engine_to_legacy(e: EnginePoint, floor_height: f64) -> LegacyPoint {
    ring_arc_to_legacy(engine_to_ring_arc(e, floor_height))
}

/// Bulk conversion of a decoded chunk vertex list.
pub fn legacy_vertices_to_engine(vertices: &[LegacyPoint], floor_height: f64) -> Vec<EnginePoint> {
    vertices
        .iter()
        .map(|&v| legacy_to_engine(v, floor_height))
        .collect()
}

/// Engine frame parameters supplied by the rendering side.
///
/// `Default` uses [`DEFAULT_FLOOR_HEIGHT`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineFrame {
    pub floor_height: f64,
}

impl Default for EngineFrame {
    fn default() -> Self {
        Self {
            floor_height: DEFAULT_FLOOR_HEIGHT,
        }
    }
}

impl EngineFrame {
    #[inline]
    pub fn new(floor_height: f64) -> Self {
        Self { floor_height }
    }
    #[inline]
    pub fn from_arc(&self, a: RingArc) -> EnginePoint {
        ring_arc_to_engine(a, self.floor_height)
    }
    #[inline]
    pub fn to_arc(&self, e: EnginePoint) -> RingArc {
        engine_to_ring_arc(e, self.floor_height)
    }
    #[inline]
    pub fn from_polar(&self, p: RingPolar) -> EnginePoint {
        ring_polar_to_engine(p, self.floor_height)
    }
    #[inline]
    pub fn to_polar(&self, e: EnginePoint) -> RingPolar {
        engine_to_ring_polar(e, self.floor_height)
    }
    #[inline]
    pub fn from_er0(&self, e: Er0Point) -> EnginePoint {
        er0_to_engine(e, self.floor_height)
    }
    #[inline]
    pub fn to_er0(&self, e: EnginePoint) -> Er0Point {
        engine_to_er0(e, self.floor_height)
    }
    #[inline]
    pub fn from_legacy(&self, l: LegacyPoint) -> EnginePoint {
        legacy_to_engine(l, self.floor_height)
    }
    #[inline]
    pub fn to_legacy(&self, e: EnginePoint) -> LegacyPoint {
        engine_to_legacy(e, self.floor_height)
    }

    /// Engine point whose `x` is the offset from the viewer, in `[-C/2, C/2)`.
    /// Single-precision renderers upload this form, never absolute `s`.
    pub fn to_engine_relative(&self, a: RingArc, viewer_s: f64) -> EnginePoint {
        let mut e = self.from_arc(a);
        e.x = camera_offset(a.s, viewer_s);
        e
    }
}
