//! Scalar wraparound for angles, arc lengths, and chunk indices.
//!
//! All functions are total. Non-finite inputs propagate (NaN in, NaN out);
//! rejecting them is the job of `frames::Validate` at ingestion boundaries.

use std::f64::consts::{PI, TAU};

use crate::cfg::{CHUNK_COUNT, HALF_CIRCUMFERENCE, RING_CIRCUMFERENCE};
use crate::chunk::ChunkIndex;

/// Non-negative modulo into `[0, m)`.
///
/// `rem_euclid` may return exactly `m` when `x` is a tiny negative number
/// (the true result rounds up); that case folds to 0. Adding `0.0` turns a
/// `-0.0` result into `+0.0` so equal inputs give bit-identical outputs.
#[inline]
pub(crate) fn modulo(x: f64, m: f64) -> f64 {
    let r = x.rem_euclid(m);
    if r >= m {
        0.0
    } else {
        r + 0.0
    }
}

/// Reduce any angle to `[-π, π)`.
#[inline]
pub fn wrap_theta(theta: f64) -> f64 {
    modulo(theta + PI, TAU) - PI
}

/// Reduce any arc length to `[0, RING_CIRCUMFERENCE)`.
#[inline]
pub fn wrap_arc_length(s: f64) -> f64 {
    modulo(s, RING_CIRCUMFERENCE)
}

/// Signed shortest offset from `from` to `to`, in `[-half, half)`.
///
/// `from + arc_delta(from, to)` lands on `to` modulo the circumference.
#[inline]
pub fn arc_delta(from: f64, to: f64) -> f64 {
    modulo(to - from + HALF_CIRCUMFERENCE, RING_CIRCUMFERENCE) - HALF_CIRCUMFERENCE
}

/// Shortest distance between two arc lengths going either way round.
pub fn arc_distance(a: f64, b: f64) -> f64 {
    let direct = (wrap_arc_length(b) - wrap_arc_length(a)).abs();
    let around = RING_CIRCUMFERENCE - direct;
    direct.min(around)
}

/// Wrap any signed chunk index into `[0, CHUNK_COUNT)`.
#[inline]
pub fn wrap_chunk_index(index: i64) -> ChunkIndex {
    ChunkIndex(index.rem_euclid(i64::from(CHUNK_COUNT)) as u32)
}
