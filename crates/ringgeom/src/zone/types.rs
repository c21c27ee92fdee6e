//! Polygon-with-holes and zone records.
//!
//! - `Ring`: ordered vertex list; closed when first == last.
//! - `Polygon`: exterior ring plus holes, x in the arc-length convention.
//! - `Zone`: polygon tagged with a floor and a type.
//! - `ZoneCfg`: tolerances for area comparisons and vertex cleanup.

use std::collections::HashSet;
use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::RING_CIRCUMFERENCE;
use crate::frames::{check_finite, InvalidField, Validate};
use crate::viewer::MAX_RADIAL_EXTENT;

/// Closed (or closable) sequence of 2D points.
///
/// Serialized as `[[x, y], ...]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Ring {
    pub points: Vec<Vector2<f64>>,
}

impl From<Vec<[f64; 2]>> for Ring {
    fn from(pts: Vec<[f64; 2]>) -> Self {
        Self {
            points: pts.into_iter().map(|[x, y]| Vector2::new(x, y)).collect(),
        }
    }
}

impl From<Ring> for Vec<[f64; 2]> {
    fn from(ring: Ring) -> Self {
        ring.points.into_iter().map(|p| [p.x, p.y]).collect()
    }
}

impl Ring {
    /// Take the points as given (no closing, no checks).
    #[inline]
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self { points }
    }

    /// Build a ring, appending the first point if the sequence is open.
    pub fn closed(mut points: Vec<Vector2<f64>>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self { points }
    }

    pub fn from_xy(points: &[(f64, f64)]) -> Self {
        Self::closed(points.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Number of distinct vertices (exact comparison, `-0.0 == 0.0`).
    pub fn distinct_points(&self) -> usize {
        let mut seen = HashSet::with_capacity(self.points.len());
        for p in &self.points {
            seen.insert(((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits()));
        }
        seen.len()
    }

    /// `(min_x, max_x)`; `None` for an empty ring.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first.x, first.x), |(lo, hi), p| (lo.min(p.x), hi.max(p.x))),
        )
    }

    /// Apply `f` to every x coordinate, leaving y untouched.
    pub fn map_x(&self, f: impl Fn(f64) -> f64) -> Ring {
        Ring {
            points: self
                .points
                .iter()
                .map(|p| Vector2::new(f(p.x), p.y))
                .collect(),
        }
    }

    pub fn translate_x(&self, dx: f64) -> Ring {
        self.map_x(|x| x + dx)
    }

    /// Drop vertices within `eps` of their predecessor; the result is closed.
    pub fn dedup_consecutive(&self, eps: f64) -> Ring {
        let open = if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points[..]
        };
        let mut out: Vec<Vector2<f64>> = Vec::with_capacity(self.points.len());
        for &p in open {
            match out.last() {
                Some(&q) if (p - q).norm() <= eps => {}
                _ => out.push(p),
            }
        }
        while out.len() > 1 && (out[out.len() - 1] - out[0]).norm() <= eps {
            out.pop();
        }
        Ring::closed(out)
    }
}

/// Which ring of a polygon an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingRole {
    Exterior,
    Hole(usize),
}

impl fmt::Display for RingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingRole::Exterior => write!(f, "exterior ring"),
            RingRole::Hole(i) => write!(f, "hole {i}"),
        }
    }
}

/// Polygon with holes in the ring's linear (arc length, width) plane.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub exterior: Ring,
    #[serde(default)]
    pub holes: Vec<Ring>,
}

impl Polygon {
    #[inline]
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self { exterior, holes }
    }

    /// Axis-aligned rectangle `[x0, x1] × [y0, y1]`, counterclockwise.
    pub fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Ring::from_xy(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)]), Vec::new())
    }

    /// Same polygon with one more hole.
    pub fn with_hole(mut self, hole: Ring) -> Self {
        self.holes.push(hole);
        self
    }

    /// Exterior ring followed by the holes, in order.
    pub fn rings(&self) -> impl Iterator<Item = (RingRole, &Ring)> {
        std::iter::once((RingRole::Exterior, &self.exterior)).chain(
            self.holes
                .iter()
                .enumerate()
                .map(|(i, h)| (RingRole::Hole(i), h)),
        )
    }

    /// x extent of the exterior ring.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        self.exterior.x_bounds()
    }

    pub fn translate_x(&self, dx: f64) -> Polygon {
        Polygon {
            exterior: self.exterior.translate_x(dx),
            holes: self.holes.iter().map(|h| h.translate_x(dx)).collect(),
        }
    }
}

impl Validate for Polygon {
    fn collect_invalid(&self, prefix: &str, out: &mut Vec<InvalidField>) {
        for (role, ring) in self.rings() {
            let base = match role {
                RingRole::Exterior => format!("{prefix}exterior"),
                RingRole::Hole(h) => format!("{prefix}holes[{h}]"),
            };
            for (i, p) in ring.points.iter().enumerate() {
                let at = format!("{base}[{i}].");
                check_finite(&at, "x", p.x, out);
                check_finite(&at, "y", p.y, out);
            }
        }
    }
}

/// Ring structure or coordinate range problem in a submitted zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// A closed triangle needs 4 points.
    TooFewPoints { ring: RingRole, len: usize },
    /// First and last point differ.
    Open { ring: RingRole },
    /// Vertex outside `0 <= x <= C`, `|y| <= MAX_RADIAL_EXTENT`, or not finite.
    OutOfBounds {
        ring: RingRole,
        index: usize,
        x: f64,
        y: f64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewPoints { ring, len } => {
                write!(f, "{ring} has {len} point(s), need at least 4")
            }
            GeometryError::Open { ring } => {
                write!(f, "{ring} is not closed (first and last point differ)")
            }
            GeometryError::OutOfBounds { ring, index, x, y } => write!(
                f,
                "{ring} vertex {index} ({x}, {y}) outside 0 <= x <= {RING_CIRCUMFERENCE}, |y| <= {MAX_RADIAL_EXTENT}"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Structure and range checks for a zone polygon as it is submitted.
///
/// Every ring needs at least 4 points and must be closed; every vertex needs
/// `0 <= x <= C` and `|y| <= MAX_RADIAL_EXTENT`. Rings are checked in order
/// and the first problem is reported. Merge output stored past `C` is not
/// meant to pass through here.
pub fn validate_zone_geometry(poly: &Polygon) -> Result<(), GeometryError> {
    let xs = 0.0..=RING_CIRCUMFERENCE;
    let ys = -MAX_RADIAL_EXTENT..=MAX_RADIAL_EXTENT;
    for (ring, r) in poly.rings() {
        if r.len() < 4 {
            return Err(GeometryError::TooFewPoints { ring, len: r.len() });
        }
        if !r.is_closed() {
            return Err(GeometryError::Open { ring });
        }
        let outside = r
            .points
            .iter()
            .enumerate()
            .find(|(_, p)| !xs.contains(&p.x) || !ys.contains(&p.y));
        if let Some((index, p)) = outside {
            return Err(GeometryError::OutOfBounds {
                ring,
                index,
                x: p.x,
                y: p.y,
            });
        }
    }
    Ok(())
}

/// Zone record as the storage side hands it over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub floor: i32,
    pub zone_type: String,
    pub geometry: Polygon,
}

impl Zone {
    pub fn new(floor: i32, zone_type: impl Into<String>, geometry: Polygon) -> Self {
        Self {
            floor,
            zone_type: zone_type.into(),
            geometry,
        }
    }
}

impl Validate for Zone {
    fn collect_invalid(&self, prefix: &str, out: &mut Vec<InvalidField>) {
        self.geometry
            .collect_invalid(&format!("{prefix}geometry."), out);
    }
}

/// Tolerances for zone comparisons.
#[derive(Clone, Copy, Debug)]
pub struct ZoneCfg {
    /// Intersection area (m²) at or below which two zones only touch.
    pub eps_area: f64,
    /// Consecutive vertices closer than this (m) are merged after a union.
    pub eps_dedup: f64,
}

impl Default for ZoneCfg {
    fn default() -> Self {
        Self {
            eps_area: 1e-3,
            eps_dedup: 1e-6,
        }
    }
}
