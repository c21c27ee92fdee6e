//! Coordinate frames of the ring and the conversions between them.
//!
//! Frames
//! - `Er0Point`: Earth-centered, Earth-fixed Cartesian. +X through the Kongo
//!   Hub meridian, +Y at 90°E, +Z north.
//! - `RingPolar`: angle around the ring, radial and vertical offsets.
//! - `RingArc`: arc length along the centerline, radial and vertical offsets.
//! - `LegacyPoint`: linear frame of older data (x = arc length, z = floor).
//! - `EnginePoint`: rendering frame (x = arc length, y = up, z = radial).
//!
//! Conventions
//! - Every pairwise conversion is a forward/inverse pair; composite
//!   conversions are chains of pairwise ones so all paths agree.
//! - Producing operations leave `theta` in `[-π, π)` and `s` in `[0, C)`.
//! - Conversions are garbage-in/garbage-out for NaN/∞; call
//!   `Validate::validate` where data enters the system.

mod convert;
mod types;
mod validate;

pub use convert::{
    engine_to_er0, engine_to_legacy, engine_to_ring_arc, engine_to_ring_polar, er0_to_engine,
    er0_to_ring_arc, er0_to_ring_polar, legacy_to_engine, legacy_to_ring_arc,
    legacy_to_ring_polar, legacy_vertices_to_engine, ring_arc_to_engine, ring_arc_to_er0,
    ring_arc_to_legacy, ring_arc_to_ring_polar, ring_polar_to_engine, ring_polar_to_er0,
    ring_polar_to_legacy, ring_polar_to_ring_arc, EngineFrame,
};
pub use types::{EnginePoint, Er0Point, LegacyPoint, RingArc, RingPolar};
pub(crate) use validate::check as check_finite;
pub use validate::{validate_floor_height, InvalidField, InvalidNumber, Validate};

#[cfg(test)]
mod tests;
