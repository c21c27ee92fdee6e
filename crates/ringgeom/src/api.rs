//! Curated call surface for consumers outside this crate (CLI, bindings).
//!
//! Important
//! - Prefer these re-exports over reaching into submodules; the module tree
//!   may be reshuffled, this list is what the front ends rely on.

// Scalar wrap arithmetic
pub use crate::wrap::{arc_delta, arc_distance, wrap_arc_length, wrap_chunk_index, wrap_theta};
// Frames
pub use crate::frames::{
    engine_to_er0, engine_to_legacy, engine_to_ring_arc, engine_to_ring_polar, er0_to_engine,
    er0_to_ring_arc, er0_to_ring_polar, legacy_to_engine, legacy_to_ring_arc,
    legacy_to_ring_polar, legacy_vertices_to_engine, ring_arc_to_engine, ring_arc_to_er0,
    ring_arc_to_legacy, ring_arc_to_ring_polar, ring_polar_to_engine, ring_polar_to_er0,
    ring_polar_to_legacy, ring_polar_to_ring_arc, validate_floor_height, EngineFrame,
    EnginePoint, Er0Point, InvalidField, InvalidNumber, LegacyPoint, RingArc, RingPolar,
    Validate,
};
// Chunks
pub use crate::chunk::{
    arc_to_chunk_index, chunk_ids_in_window, chunk_index_to_arc, chunk_index_to_range,
    chunk_index_to_ring_polar, chunk_window, ring_polar_to_chunk_index, validate_chunk_index,
    ChunkId, ChunkIndex, ChunkIndexError,
};
// Viewer
pub use crate::viewer::{
    camera_offset, denormalize_from_camera, normalize_relative_to_camera, view_bounds,
    ArcInterval, ViewBounds,
};
// Stations
pub use crate::stations::{
    nearest_pillar_hub, pillar_hub_arc, pillar_hub_er0, pillar_hub_polar, StationError,
    PILLAR_HUB_COUNT,
};
// Zones
pub use crate::zone::{
    canonicalize_for_storage, classify_contact, detect_wrap, find_conflicts, intersection_area,
    merge_polygons, normalize_for_area, normalize_for_intersection, outline_area, polygon_area,
    polygons_overlap, subtract_polygon, validate_zone_geometry, Contact, GeometryError,
    MergeError, NormalizeError, Polygon, Ring, RingRole, WrapState, Zone, ZoneCfg,
};
