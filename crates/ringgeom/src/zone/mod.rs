//! Zone polygons on the ring: wrap normalization, area, overlap, merge,
//! subtraction.
//!
//! Polygons live in the (arc length, width) plane. Every operation that
//! measures or compares polygons goes through `normalize` first; the planar
//! work itself is delegated to the `geo` crate.
//!
//! Cross-refs: `normalize` (wrap detection and shifting), `overlap`
//! (area and contact), `merge` (union, difference, storage re-wrap), `types`
//! (records and ingestion checks).

pub mod merge;
pub mod normalize;
pub mod overlap;
mod planar;
pub mod sample;
pub mod types;

pub use merge::{canonicalize_for_storage, merge_polygons, subtract_polygon, MergeError};
pub use normalize::{
    detect_wrap, normalize_for_area, normalize_for_intersection, NormalizeError, WrapState,
};
pub use overlap::{
    classify_contact, find_conflicts, intersection_area, outline_area, polygon_area,
    polygons_overlap, Contact,
};
pub use types::{
    validate_zone_geometry, GeometryError, Polygon, Ring, RingRole, Zone, ZoneCfg,
};
