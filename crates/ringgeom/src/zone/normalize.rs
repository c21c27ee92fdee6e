//! Wrap normalization of stored polygons.
//!
//! Purpose
//! - Stored zone polygons use arc length as x. A zone drawn across the seam
//!   at `s = 0` may be stored with vertices on both ends of `[0, C)`, or with
//!   x values pushed past `C` (merged zones are stored that way). Planar area
//!   and intersection are only meaningful once such polygons are rewritten
//!   into one contiguous x range.
//!
//! Policy
//! - Detection looks at the exterior ring only: wrapped iff
//!   `span > C/2 || max_x > C/2`. The second test catches polygons stored
//!   entirely past the half point, whose span alone looks harmless.
//! - A wrapped polygon has every vertex with `x > C/2` moved to `x - C`, ring
//!   by ring (exterior then holes, in order). y is never touched.
//! - A polygon that is not wrapped is returned unchanged.
//! - A ring that ends up with fewer than 3 distinct points is an error.
//!   Callers must not fall back to the raw polygon.
//!
//! Known limitation
//! - The half-point threshold assumes no zone straddles the antipode
//!   `s = C/2`; a polygon that does would be torn apart by the shift.

use std::fmt;

use tracing::{debug, warn};

use super::types::{Polygon, Ring, RingRole};
use crate::cfg::{HALF_CIRCUMFERENCE, RING_CIRCUMFERENCE};

/// Exterior x extent and the wrap verdict derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapState {
    pub min_x: f64,
    pub max_x: f64,
    pub span: f64,
    pub wrapped: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormalizeError {
    /// Ring without any vertices.
    EmptyRing { ring: RingRole },
    /// Fewer than 3 distinct vertices after shifting.
    Degenerate { ring: RingRole, distinct: usize },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::EmptyRing { ring } => write!(f, "{ring} has no vertices"),
            NormalizeError::Degenerate { ring, distinct } => write!(
                f,
                "{ring} is degenerate after wrap normalization ({distinct} distinct points, need 3)"
            ),
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Wrap verdict for `poly`; `None` when the exterior ring is empty.
pub fn detect_wrap(poly: &Polygon) -> Option<WrapState> {
    let (min_x, max_x) = poly.x_bounds()?;
    let span = max_x - min_x;
    Some(WrapState {
        min_x,
        max_x,
        span,
        wrapped: span > HALF_CIRCUMFERENCE || max_x > HALF_CIRCUMFERENCE,
    })
}

fn shift_ring(ring: &Ring) -> Ring {
    let shifted = ring.map_x(|x| {
        if x > HALF_CIRCUMFERENCE {
            x - RING_CIRCUMFERENCE
        } else {
            x
        }
    });
    Ring::closed(shifted.points)
}

fn check_ring(role: RingRole, ring: &Ring) -> Result<(), NormalizeError> {
    let distinct = ring.distinct_points();
    if distinct < 3 {
        warn!(%role, distinct, "degenerate ring after wrap normalization");
        return Err(NormalizeError::Degenerate { ring: role, distinct });
    }
    Ok(())
}

fn check_nonempty(poly: &Polygon) -> Result<(), NormalizeError> {
    for (role, ring) in poly.rings() {
        if ring.is_empty() {
            return Err(NormalizeError::EmptyRing { ring: role });
        }
    }
    Ok(())
}

/// Normalize for zone-vs-zone intersection. Holes are kept and shifted with
/// the exterior; every ring must stay non-degenerate.
pub fn normalize_for_intersection(poly: &Polygon) -> Result<Polygon, NormalizeError> {
    check_nonempty(poly)?;
    let state = detect_wrap(poly).ok_or(NormalizeError::EmptyRing {
        ring: RingRole::Exterior,
    })?;
    if !state.wrapped {
        return Ok(poly.clone());
    }
    debug!(
        span = state.span,
        max_x = state.max_x,
        rings = 1 + poly.holes.len(),
        "wrapped polygon"
    );
    let exterior = shift_ring(&poly.exterior);
    check_ring(RingRole::Exterior, &exterior)?;
    let mut holes = Vec::with_capacity(poly.holes.len());
    for (i, hole) in poly.holes.iter().enumerate() {
        let shifted = shift_ring(hole);
        check_ring(RingRole::Hole(i), &shifted)?;
        holes.push(shifted);
    }
    Ok(Polygon::new(exterior, holes))
}

/// Normalize for outline area only.
///
/// Holes are discarded: the result measures the exterior outline and must
/// not be used for overlap tests or hole-aware area. Use
/// [`normalize_for_intersection`] for those.
pub fn normalize_for_area(poly: &Polygon) -> Result<Polygon, NormalizeError> {
    if poly.exterior.is_empty() {
        return Err(NormalizeError::EmptyRing {
            ring: RingRole::Exterior,
        });
    }
    let outline = Polygon::new(poly.exterior.clone(), Vec::new());
    normalize_for_intersection(&outline)
}
