//! Scalar wrap, frame conversion, chunk, and camera bindings.

use crate::common::value_err;
use pyo3::prelude::*;
use ringgeom::api::{
    arc_distance, arc_to_chunk_index, chunk_index_to_range, denormalize_from_camera,
    er0_to_ring_polar, normalize_relative_to_camera, ring_arc_to_ring_polar, ring_polar_to_er0,
    ring_polar_to_ring_arc, validate_chunk_index, validate_floor_height, wrap_arc_length,
    wrap_theta, EngineFrame, Er0Point, RingArc, RingPolar,
};

type Triple = (f64, f64, f64);

#[pyfunction]
pub fn wrap_arc(s: f64) -> f64 {
    wrap_arc_length(s)
}

#[pyfunction]
pub fn wrap_angle(theta: f64) -> f64 {
    wrap_theta(theta)
}

#[pyfunction]
pub fn arc_dist(a: f64, b: f64) -> f64 {
    arc_distance(a, b)
}

#[pyfunction]
pub fn polar_to_er0((theta, r, z): Triple) -> Triple {
    let e = ring_polar_to_er0(RingPolar::new(theta, r, z));
    (e.x, e.y, e.z)
}

#[pyfunction]
pub fn er0_to_polar((x, y, z): Triple) -> Triple {
    let p = er0_to_ring_polar(Er0Point::new(x, y, z));
    (p.theta, p.r, p.z)
}

#[pyfunction]
pub fn polar_to_arc((theta, r, z): Triple) -> Triple {
    let a = ring_polar_to_ring_arc(RingPolar::new(theta, r, z));
    (a.s, a.r, a.z)
}

#[pyfunction]
pub fn arc_to_polar((s, r, z): Triple) -> Triple {
    let p = ring_arc_to_ring_polar(RingArc::new(s, r, z));
    (p.theta, p.r, p.z)
}

/// Engine coordinates, optionally re-based on a viewer arc length.
#[pyfunction]
#[pyo3(signature = (arc, floor_height, viewer=None))]
pub fn arc_to_engine(arc: Triple, floor_height: f64, viewer: Option<f64>) -> PyResult<Triple> {
    validate_floor_height(floor_height).map_err(value_err)?;
    let frame = EngineFrame::new(floor_height);
    let a = RingArc::new(arc.0, arc.1, arc.2);
    let e = match viewer {
        Some(v) => frame.to_engine_relative(a, v),
        None => frame.from_arc(a),
    };
    Ok((e.x, e.y, e.z))
}

#[pyfunction]
pub fn chunk_index(s: f64) -> u32 {
    arc_to_chunk_index(s).get()
}

/// `(min, max)` of a chunk; rejects indices too far outside the range.
#[pyfunction]
pub fn chunk_range(index: i64) -> PyResult<(f64, f64)> {
    validate_chunk_index(index).map_err(value_err)?;
    Ok(chunk_index_to_range(index))
}

#[pyfunction]
pub fn to_camera(absolute: f64, viewer: f64) -> f64 {
    normalize_relative_to_camera(absolute, viewer)
}

#[pyfunction]
pub fn from_camera(relative: f64, viewer: f64) -> f64 {
    denormalize_from_camera(relative, viewer)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(wrap_arc, m)?)?;
    m.add_function(wrap_pyfunction!(wrap_angle, m)?)?;
    m.add_function(wrap_pyfunction!(arc_dist, m)?)?;
    m.add_function(wrap_pyfunction!(polar_to_er0, m)?)?;
    m.add_function(wrap_pyfunction!(er0_to_polar, m)?)?;
    m.add_function(wrap_pyfunction!(polar_to_arc, m)?)?;
    m.add_function(wrap_pyfunction!(arc_to_polar, m)?)?;
    m.add_function(wrap_pyfunction!(arc_to_engine, m)?)?;
    m.add_function(wrap_pyfunction!(chunk_index, m)?)?;
    m.add_function(wrap_pyfunction!(chunk_range, m)?)?;
    m.add_function(wrap_pyfunction!(to_camera, m)?)?;
    m.add_function(wrap_pyfunction!(from_camera, m)?)?;
    Ok(())
}
