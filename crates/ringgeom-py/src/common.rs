use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use ringgeom::api::{validate_zone_geometry, Polygon, Ring, Validate};

/// `(exterior, holes)` as Python hands it over.
pub type PyPolygon = (Vec<(f64, f64)>, Vec<Vec<(f64, f64)>>);

pub fn value_err(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn ring_from_py(points: Vec<(f64, f64)>) -> Ring {
    Ring::from(points.into_iter().map(|(x, y)| [x, y]).collect::<Vec<_>>())
}

/// Rings must be closed, with coordinates on the ring.
pub fn polygon_from_py((exterior, holes): PyPolygon) -> PyResult<Polygon> {
    let poly = Polygon::new(
        ring_from_py(exterior),
        holes.into_iter().map(ring_from_py).collect(),
    );
    poly.validate().map_err(value_err)?;
    validate_zone_geometry(&poly).map_err(value_err)?;
    Ok(poly)
}

pub fn polygon_to_py(poly: &Polygon) -> PyPolygon {
    let ring = |r: &Ring| -> Vec<(f64, f64)> { r.points.iter().map(|p| (p.x, p.y)).collect() };
    (ring(&poly.exterior), poly.holes.iter().map(ring).collect())
}
