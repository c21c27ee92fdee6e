//! Adapter onto the `geo` crate for planar area and boolean operations.
//!
//! Nothing here knows about the wrap seam; inputs are expected to be
//! normalized already.

use geo::{Area, BooleanOps, Coord, Intersects, LineString, MultiPolygon};
use nalgebra::Vector2;

use super::types::{Polygon, Ring};

fn to_line_string(ring: &Ring) -> LineString<f64> {
    LineString::from(
        ring.points
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect::<Vec<_>>(),
    )
}

fn from_line_string(ls: &LineString<f64>) -> Ring {
    Ring::closed(ls.coords().map(|c| Vector2::new(c.x, c.y)).collect())
}

pub(crate) fn to_geo(poly: &Polygon) -> geo::Polygon<f64> {
    geo::Polygon::new(
        to_line_string(&poly.exterior),
        poly.holes.iter().map(to_line_string).collect(),
    )
}

pub(crate) fn from_geo(poly: &geo::Polygon<f64>) -> Polygon {
    Polygon::new(
        from_line_string(poly.exterior()),
        poly.interiors().iter().map(from_line_string).collect(),
    )
}

/// Unsigned area, holes subtracted.
pub(crate) fn area(poly: &Polygon) -> f64 {
    to_geo(poly).unsigned_area()
}

pub(crate) fn intersection_area(a: &Polygon, b: &Polygon) -> f64 {
    to_geo(a).intersection(&to_geo(b)).unsigned_area()
}

/// True when the polygons share any point, boundaries included.
pub(crate) fn intersects(a: &Polygon, b: &Polygon) -> bool {
    to_geo(a).intersects(&to_geo(b))
}

/// Sequential union, left to right.
pub(crate) fn union_all(polys: &[Polygon]) -> MultiPolygon<f64> {
    let mut iter = polys.iter();
    let Some(first) = iter.next() else {
        return MultiPolygon::new(Vec::new());
    };
    let mut acc = MultiPolygon::new(vec![to_geo(first)]);
    for p in iter {
        acc = acc.union(&MultiPolygon::new(vec![to_geo(p)]));
    }
    acc
}

/// `a` minus `b`; every component of the result, in output order.
pub(crate) fn difference(a: &Polygon, b: &Polygon) -> MultiPolygon<f64> {
    to_geo(a).difference(&to_geo(b))
}
