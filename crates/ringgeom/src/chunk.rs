//! Fixed-length chunks along the ring.
//!
//! Policy
//! - Chunk indices coming from arithmetic are wrapped, never asserted:
//!   `chunk_index_to_arc` and `chunk_index_to_range` accept any signed index,
//!   wrap it into `[0, CHUNK_COUNT)`, then proceed.
//! - `validate_chunk_index` is the strict variant for indices arriving from
//!   outside (requests, files); it rejects values too far from the range to
//!   plausibly be a neighbor offset.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cfg::{CHUNK_COUNT, CHUNK_LENGTH};
use crate::frames::{ring_arc_to_ring_polar, ring_polar_to_ring_arc, RingArc, RingPolar};
use crate::wrap::{wrap_arc_length, wrap_chunk_index};

/// Chunk index in `[0, CHUNK_COUNT)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkIndex(pub u32);

impl ChunkIndex {
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChunkIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chunk on a particular floor; renders as `"{floor}_{index}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkId {
    pub floor: i32,
    pub index: ChunkIndex,
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.floor, self.index)
    }
}

/// Chunk index rejected at an ingestion boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkIndexError {
    OutOfRange { index: i64 },
}

impl fmt::Display for ChunkIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkIndexError::OutOfRange { index } => write!(
                f,
                "chunk index {} is too far from valid range (0-{})",
                index,
                CHUNK_COUNT - 1
            ),
        }
    }
}

impl std::error::Error for ChunkIndexError {}

/// `floor(wrap(s) / CHUNK_LENGTH)`.
pub fn arc_to_chunk_index(s: f64) -> ChunkIndex {
    let idx = (wrap_arc_length(s) / CHUNK_LENGTH).floor() as u32;
    // The division can round up to CHUNK_COUNT for s one ulp below C.
    ChunkIndex(idx % CHUNK_COUNT)
}

/// Centre of the chunk as a representative point (`r = z = 0`).
pub fn chunk_index_to_arc(index: i64) -> RingArc {
    let i = wrap_chunk_index(index);
    RingArc {
        s: wrap_arc_length((f64::from(i.0) + 0.5) * CHUNK_LENGTH),
        r: 0.0,
        z: 0.0,
    }
}

/// `[min, max)` arc-length extent of the chunk. `max` is not wrapped: the
/// last chunk ends at exactly `C`.
pub fn chunk_index_to_range(index: i64) -> (f64, f64) {
    let i = wrap_chunk_index(index);
    let min = f64::from(i.0) * CHUNK_LENGTH;
    (min, min + CHUNK_LENGTH)
}

pub fn ring_polar_to_chunk_index(p: RingPolar) -> ChunkIndex {
    arc_to_chunk_index(ring_polar_to_ring_arc(p).s)
}

pub fn chunk_index_to_ring_polar(index: i64) -> RingPolar {
    ring_arc_to_ring_polar(chunk_index_to_arc(index))
}

/// Wrap an index supplied from outside, rejecting anything outside
/// `[-CHUNK_COUNT, 2·CHUNK_COUNT)`.
pub fn validate_chunk_index(index: i64) -> Result<ChunkIndex, ChunkIndexError> {
    let n = i64::from(CHUNK_COUNT);
    if index < -n || index >= 2 * n {
        return Err(ChunkIndexError::OutOfRange { index });
    }
    Ok(wrap_chunk_index(index))
}

/// Chunks within `radius_m` of `center_s`, ordered by offset from the centre
/// chunk (most negative first) and free of duplicates. A radius covering the
/// whole ring yields every chunk once. Non-positive radius yields nothing.
pub fn chunk_window(center_s: f64, radius_m: f64) -> Vec<ChunkIndex> {
    if radius_m.is_nan() || radius_m <= 0.0 {
        return Vec::new();
    }
    let center = arc_to_chunk_index(center_s);
    let max_radius = i64::from(CHUNK_COUNT / 2);
    let chunk_radius = ((radius_m / CHUNK_LENGTH).ceil() as i64).min(max_radius);
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity((2 * chunk_radius + 1) as usize);
    for offset in -chunk_radius..=chunk_radius {
        let idx = wrap_chunk_index(i64::from(center.0) + offset);
        if seen.insert(idx) {
            out.push(idx);
        }
    }
    tracing::trace!(
        center = center.0,
        chunk_radius,
        count = out.len(),
        "chunk_window"
    );
    out
}

/// [`chunk_window`] tagged with a floor.
pub fn chunk_ids_in_window(floor: i32, center_s: f64, radius_m: f64) -> Vec<ChunkId> {
    chunk_window(center_s, radius_m)
        .into_iter()
        .map(|index| ChunkId { floor, index })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::RING_CIRCUMFERENCE;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn known_positions() {
        assert_eq!(arc_to_chunk_index(0.0), ChunkIndex(0));
        assert_eq!(arc_to_chunk_index(999.999), ChunkIndex(0));
        assert_eq!(arc_to_chunk_index(1000.0), ChunkIndex(1));
        assert_eq!(
            arc_to_chunk_index(RING_CIRCUMFERENCE - 1.0),
            ChunkIndex(CHUNK_COUNT - 1)
        );
        assert_eq!(arc_to_chunk_index(RING_CIRCUMFERENCE), ChunkIndex(0));
        assert_eq!(arc_to_chunk_index(-1.0), ChunkIndex(CHUNK_COUNT - 1));
    }

    #[test]
    fn largest_float_below_circumference_stays_in_range() {
        let s = f64::from_bits(RING_CIRCUMFERENCE.to_bits() - 1);
        assert!(arc_to_chunk_index(s).0 < CHUNK_COUNT);
    }

    #[test]
    fn centre_and_range_wrap_defensively() {
        let a = chunk_index_to_arc(0);
        assert_eq!(a, RingArc::new(500.0, 0.0, 0.0));
        let last = chunk_index_to_arc(-1);
        assert_eq!(last.s, RING_CIRCUMFERENCE - 500.0);
        assert_eq!(chunk_index_to_arc(i64::from(CHUNK_COUNT) + 2).s, 2500.0);

        assert_eq!(chunk_index_to_range(3), (3000.0, 4000.0));
        assert_eq!(
            chunk_index_to_range(-1),
            (RING_CIRCUMFERENCE - 1000.0, RING_CIRCUMFERENCE)
        );
    }

    #[test]
    fn centre_maps_back_to_its_chunk() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let i = rng.gen_range(-1_000_000i64..1_000_000);
            let expected = wrap_chunk_index(i);
            assert_eq!(arc_to_chunk_index(chunk_index_to_arc(i).s), expected);
            assert_eq!(ring_polar_to_chunk_index(chunk_index_to_ring_polar(i)), expected);
        }
    }

    #[test]
    fn strict_validation_bounds() {
        assert_eq!(validate_chunk_index(5), Ok(ChunkIndex(5)));
        assert_eq!(validate_chunk_index(-1), Ok(ChunkIndex(CHUNK_COUNT - 1)));
        let n = i64::from(CHUNK_COUNT);
        assert_eq!(validate_chunk_index(2 * n - 1), Ok(ChunkIndex(CHUNK_COUNT - 1)));
        assert!(validate_chunk_index(2 * n).is_err());
        let err = validate_chunk_index(-n - 1).unwrap_err();
        assert!(err.to_string().contains("too far"));
    }

    #[test]
    fn window_wraps_across_the_seam() {
        let w = chunk_window(500.0, 2000.0);
        let got: Vec<u32> = w.iter().map(|c| c.0).collect();
        assert_eq!(got, vec![CHUNK_COUNT - 2, CHUNK_COUNT - 1, 0, 1, 2]);
        assert!(chunk_window(500.0, 0.0).is_empty());
        assert!(chunk_window(500.0, f64::NAN).is_empty());

        let all = chunk_window(0.0, RING_CIRCUMFERENCE);
        assert_eq!(all.len(), CHUNK_COUNT as usize);

        let ids = chunk_ids_in_window(2, 0.0, 1.0);
        let rendered: Vec<String> = ids.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec![format!("2_{}", CHUNK_COUNT - 1), "2_0".into(), "2_1".into()]);
    }
}
