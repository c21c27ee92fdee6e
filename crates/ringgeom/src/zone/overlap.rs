//! Zone area and overlap on normalized polygons.
//!
//! Every entry point normalizes its operands first and then hands off to the
//! planar adapter. Failed normalization is returned, never papered over with
//! the raw polygon.

use super::normalize::{normalize_for_area, normalize_for_intersection, NormalizeError};
use super::planar;
use super::types::{Polygon, Zone, ZoneCfg};

/// How two zones relate once both are normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    Disjoint,
    /// Boundaries touch; the shared area is at most the tolerance.
    Adjacent,
    Overlapping,
}

/// Hole-aware planar area.
pub fn polygon_area(poly: &Polygon) -> Result<f64, NormalizeError> {
    Ok(planar::area(&normalize_for_intersection(poly)?))
}

/// Area enclosed by the exterior ring, holes ignored.
pub fn outline_area(poly: &Polygon) -> Result<f64, NormalizeError> {
    Ok(planar::area(&normalize_for_area(poly)?))
}

pub fn intersection_area(a: &Polygon, b: &Polygon) -> Result<f64, NormalizeError> {
    let a = normalize_for_intersection(a)?;
    let b = normalize_for_intersection(b)?;
    Ok(planar::intersection_area(&a, &b))
}

/// True when the shared area exceeds `eps`. Edge-only contact is not overlap.
pub fn polygons_overlap(a: &Polygon, b: &Polygon, eps: f64) -> Result<bool, NormalizeError> {
    Ok(intersection_area(a, b)? > eps)
}

pub fn classify_contact(a: &Polygon, b: &Polygon, eps: f64) -> Result<Contact, NormalizeError> {
    let a = normalize_for_intersection(a)?;
    let b = normalize_for_intersection(b)?;
    if planar::intersection_area(&a, &b) > eps {
        Ok(Contact::Overlapping)
    } else if planar::intersects(&a, &b) {
        Ok(Contact::Adjacent)
    } else {
        Ok(Contact::Disjoint)
    }
}

impl Zone {
    pub fn area(&self) -> Result<f64, NormalizeError> {
        polygon_area(&self.geometry)
    }

    /// Same floor and overlapping geometry.
    pub fn overlaps(&self, other: &Zone, cfg: &ZoneCfg) -> Result<bool, NormalizeError> {
        if self.floor != other.floor {
            return Ok(false);
        }
        polygons_overlap(&self.geometry, &other.geometry, cfg.eps_area)
    }
}

/// Indices into `existing` of zones that overlap `candidate`.
pub fn find_conflicts(
    candidate: &Zone,
    existing: &[Zone],
    cfg: &ZoneCfg,
) -> Result<Vec<usize>, NormalizeError> {
    let mut out = Vec::new();
    for (i, zone) in existing.iter().enumerate() {
        if candidate.overlaps(zone, cfg)? {
            out.push(i);
        }
    }
    Ok(out)
}
