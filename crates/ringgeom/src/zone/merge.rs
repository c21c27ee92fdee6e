//! Wrap-safe union and difference of zone polygons, and the storage re-wrap.
//!
//! Merging two zones on either side of the seam only works once both are in
//! the same contiguous frame, so each input is normalized before the union.
//! The result is shifted back by a whole circumference when it sits left of
//! the seam, which is how merged zones end up stored past `C`.
//!
//! Subtraction (cutting a dezone out of a zone) follows the same path but
//! keeps every component: a cut straight across a zone leaves two zones.

use std::fmt;

use geo::Area;
use tracing::debug;

use super::normalize::{normalize_for_intersection, NormalizeError};
use super::planar;
use super::types::{Polygon, ZoneCfg};
use crate::cfg::RING_CIRCUMFERENCE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeError {
    Empty,
    Normalize { index: usize, source: NormalizeError },
    EmptyUnion,
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::Empty => write!(f, "no polygons to merge"),
            MergeError::Normalize { index, source } => {
                write!(f, "polygon {index} failed to normalize: {source}")
            }
            MergeError::EmptyUnion => write!(f, "union of the inputs has no area"),
        }
    }
}

impl std::error::Error for MergeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MergeError::Normalize { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Shift by `±C` so the exterior starts at or after 0, or ends before `C`.
///
/// `min_x < 0` moves right; otherwise `max_x >= C` moves left. The result
/// may still reach past `C`; normalization recognizes that form.
pub fn canonicalize_for_storage(poly: &Polygon) -> Polygon {
    match poly.x_bounds() {
        Some((min_x, _)) if min_x < 0.0 => poly.translate_x(RING_CIRCUMFERENCE),
        Some((_, max_x)) if max_x >= RING_CIRCUMFERENCE => poly.translate_x(-RING_CIRCUMFERENCE),
        _ => poly.clone(),
    }
}

fn dedup(poly: &Polygon, eps: f64) -> Polygon {
    Polygon::new(
        poly.exterior.dedup_consecutive(eps),
        poly.holes.iter().map(|h| h.dedup_consecutive(eps)).collect(),
    )
}

/// Union of `polys` ready for storage.
///
/// A union that falls apart into several components keeps only the largest
/// one (ties: first produced).
pub fn merge_polygons(polys: &[Polygon], cfg: &ZoneCfg) -> Result<Polygon, MergeError> {
    if polys.is_empty() {
        return Err(MergeError::Empty);
    }
    let mut normalized = Vec::with_capacity(polys.len());
    for (index, p) in polys.iter().enumerate() {
        let n = normalize_for_intersection(p)
            .map_err(|source| MergeError::Normalize { index, source })?;
        normalized.push(n);
    }
    let union = planar::union_all(&normalized);
    debug!(inputs = polys.len(), components = union.0.len(), "merged zones");

    let mut best: Option<(f64, &geo::Polygon<f64>)> = None;
    for component in &union.0 {
        let a = component.unsigned_area();
        if best.map_or(true, |(best_a, _)| a > best_a) {
            best = Some((a, component));
        }
    }
    let Some((area, largest)) = best else {
        return Err(MergeError::EmptyUnion);
    };
    if area <= 0.0 {
        return Err(MergeError::EmptyUnion);
    }

    let cleaned = dedup(&planar::from_geo(largest), cfg.eps_dedup);
    let stored = canonicalize_for_storage(&cleaned);
    debug!(
        area,
        shifted = stored.x_bounds() != cleaned.x_bounds(),
        "canonicalized merged zone"
    );
    Ok(stored)
}

/// `target` with `cutter` removed, one stored polygon per remaining piece.
///
/// Both operands are normalized, then moved so the leftmost vertex of either
/// sits at `x = 0` while the difference is taken; the planar boolean ops grid
/// their input on its extent. Pieces come back largest first. An empty result
/// means the cutter covered the whole target.
///
/// Errors name the operand that failed to normalize: 0 for `target`, 1 for
/// `cutter`.
pub fn subtract_polygon(
    target: &Polygon,
    cutter: &Polygon,
    cfg: &ZoneCfg,
) -> Result<Vec<Polygon>, MergeError> {
    let t = normalize_for_intersection(target)
        .map_err(|source| MergeError::Normalize { index: 0, source })?;
    let c = normalize_for_intersection(cutter)
        .map_err(|source| MergeError::Normalize { index: 1, source })?;

    let origin = match (t.x_bounds(), c.x_bounds()) {
        (Some((a, _)), Some((b, _))) => a.min(b),
        _ => 0.0,
    };
    let rest = planar::difference(&t.translate_x(-origin), &c.translate_x(-origin));

    let mut pieces: Vec<(f64, Polygon)> = rest
        .0
        .iter()
        .map(|component| (component.unsigned_area(), component))
        .filter(|(area, _)| *area > 0.0)
        .map(|(area, component)| {
            let piece = dedup(&planar::from_geo(component), cfg.eps_dedup).translate_x(origin);
            (area, canonicalize_for_storage(&piece))
        })
        .collect();
    pieces.sort_by(|a, b| b.0.total_cmp(&a.0));
    debug!(
        pieces = pieces.len(),
        areas = ?pieces.iter().map(|(a, _)| *a).collect::<Vec<_>>(),
        "subtracted zone"
    );
    Ok(pieces.into_iter().map(|(_, p)| p).collect())
}
