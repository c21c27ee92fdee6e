//! Ring coordinate frames and wrap-safe planar geometry.
//!
//! The ring is a closed band of fixed circumference around Earth. Positions on
//! it are circular (arc length wraps at the circumference) but are stored and
//! rendered in linear frames. This crate owns every conversion between those
//! frames and the polygon normalization that keeps planar area and
//! intersection correct across the wrap seam.
//!
//! API Policy
//! - Everything here is pure: no I/O, no global state, no interior mutability.
//! - The CLI and the Python bindings consume these modules directly; formulas
//!   live in exactly one place (`frames`, `wrap`).

pub mod api;
pub mod cfg;
pub mod chunk;
pub mod frames;
pub mod stations;
pub mod viewer;
pub mod wrap;
pub mod zone;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{
        CHUNK_COUNT, CHUNK_LENGTH, DEFAULT_FLOOR_HEIGHT, HALF_CIRCUMFERENCE, RING_CIRCUMFERENCE,
        RING_ORBITAL_RADIUS,
    };
    pub use crate::chunk::{arc_to_chunk_index, chunk_index_to_arc, chunk_index_to_range, ChunkIndex};
    pub use crate::frames::{
        EnginePoint, EngineFrame, Er0Point, InvalidNumber, LegacyPoint, RingArc, RingPolar,
        Validate,
    };
    pub use crate::viewer::{denormalize_from_camera, normalize_relative_to_camera};
    pub use crate::wrap::{arc_distance, wrap_arc_length, wrap_theta};
    pub use crate::zone::{
        classify_contact, normalize_for_area, normalize_for_intersection, polygon_area,
        polygons_overlap, Contact, NormalizeError, Polygon, Ring, Zone, ZoneCfg,
    };
    pub use nalgebra::Vector2 as Vec2;
}
