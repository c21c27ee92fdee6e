//! PyO3 bindings for the `ringgeom` crate.
//!
//! Notes
//! - Points cross the boundary as `(a, b, c)` tuples in the frame's field
//!   order; polygons as `(exterior, holes)` lists of `(x, y)` pairs.
//! - Every formula stays in `ringgeom`; this crate only converts arguments
//!   and maps errors to `ValueError`.

use pyo3::prelude::*;

mod common;
mod frames;
mod zones;

#[pymodule]
fn ringgeom_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("RING_CIRCUMFERENCE", ringgeom::cfg::RING_CIRCUMFERENCE)?;
    m.add("CHUNK_LENGTH", ringgeom::cfg::CHUNK_LENGTH)?;
    m.add("CHUNK_COUNT", ringgeom::cfg::CHUNK_COUNT)?;
    m.add("DEFAULT_FLOOR_HEIGHT", ringgeom::cfg::DEFAULT_FLOOR_HEIGHT)?;
    frames::register(m)?;
    zones::register(m)?;
    Ok(())
}
