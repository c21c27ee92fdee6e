//! Zone polygon bindings: normalization, area, overlap, subtraction.

use crate::common::{polygon_from_py, polygon_to_py, value_err, PyPolygon};
use pyo3::prelude::*;
use ringgeom::api::{
    classify_contact, normalize_for_intersection, outline_area, polygon_area, polygons_overlap,
    subtract_polygon, Contact, ZoneCfg,
};

#[pyfunction]
pub fn normalize_polygon(poly: PyPolygon) -> PyResult<PyPolygon> {
    let p = polygon_from_py(poly)?;
    let n = normalize_for_intersection(&p).map_err(value_err)?;
    Ok(polygon_to_py(&n))
}

/// Hole-aware area; `outline=True` ignores holes.
#[pyfunction]
#[pyo3(signature = (poly, outline=false))]
pub fn zone_area(poly: PyPolygon, outline: bool) -> PyResult<f64> {
    let p = polygon_from_py(poly)?;
    let area = if outline {
        outline_area(&p)
    } else {
        polygon_area(&p)
    };
    area.map_err(value_err)
}

#[pyfunction]
#[pyo3(signature = (a, b, eps=1e-3))]
pub fn zones_overlap(a: PyPolygon, b: PyPolygon, eps: f64) -> PyResult<bool> {
    let (a, b) = (polygon_from_py(a)?, polygon_from_py(b)?);
    polygons_overlap(&a, &b, eps).map_err(value_err)
}

/// `"disjoint"`, `"adjacent"`, or `"overlapping"`.
#[pyfunction]
#[pyo3(signature = (a, b, eps=1e-3))]
pub fn zone_contact(a: PyPolygon, b: PyPolygon, eps: f64) -> PyResult<&'static str> {
    let (a, b) = (polygon_from_py(a)?, polygon_from_py(b)?);
    let contact = classify_contact(&a, &b, eps).map_err(value_err)?;
    Ok(match contact {
        Contact::Disjoint => "disjoint",
        Contact::Adjacent => "adjacent",
        Contact::Overlapping => "overlapping",
    })
}

/// Pieces of `target` left after removing `cutter`, largest first.
#[pyfunction]
pub fn subtract_zone(target: PyPolygon, cutter: PyPolygon) -> PyResult<Vec<PyPolygon>> {
    let (t, c) = (polygon_from_py(target)?, polygon_from_py(cutter)?);
    let pieces = subtract_polygon(&t, &c, &ZoneCfg::default()).map_err(value_err)?;
    Ok(pieces.iter().map(polygon_to_py).collect())
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize_polygon, m)?)?;
    m.add_function(wrap_pyfunction!(zone_area, m)?)?;
    m.add_function(wrap_pyfunction!(zones_overlap, m)?)?;
    m.add_function(wrap_pyfunction!(zone_contact, m)?)?;
    m.add_function(wrap_pyfunction!(subtract_zone, m)?)?;
    Ok(())
}
