//! Viewer-relative re-basing and view windows.
//!
//! Renderers keep the viewer near the origin and express everything else as a
//! small signed offset. On the ring that offset must take the short way round,
//! so it is confined to `[-C/2, C/2)`.

use serde::{Deserialize, Serialize};

use crate::cfg::RING_CIRCUMFERENCE;
use crate::frames::RingArc;
use crate::wrap::{arc_delta, modulo, wrap_arc_length};

/// Default band width around the viewer when none is given, meters.
pub const DEFAULT_VIEW_WIDTH: f64 = 5_000.0;
/// Zones never extend further than this from the centerline, meters.
pub const MAX_RADIAL_EXTENT: f64 = 2_500.0;

/// Signed offset of `absolute` from `viewer`, in `[-C/2, C/2)`.
#[inline]
pub fn camera_offset(absolute: f64, viewer: f64) -> f64 {
    arc_delta(viewer, absolute)
}

/// `viewer + offset`: the copy of `absolute` nearest to the viewer.
///
/// The result lies within half a circumference of `viewer` and may fall
/// outside `[0, C)` when the viewer is near the seam.
pub fn normalize_relative_to_camera(absolute: f64, viewer: f64) -> f64 {
    viewer + camera_offset(absolute, viewer)
}

/// Inverse of [`normalize_relative_to_camera`]: back to `[0, C)`.
///
/// The viewer is canonicalized first so the same offset is re-applied from
/// the viewer's canonical position. The round trip through
/// [`normalize_relative_to_camera`] is exact for integer inputs; otherwise it
/// is off by at most a few ulps of `max(|p|, |viewer|, C)` (two ulps of `C`
/// for canonical inputs).
pub fn denormalize_from_camera(relative: f64, viewer: f64) -> f64 {
    let offset = relative - viewer;
    wrap_arc_length(wrap_arc_length(viewer) + offset)
}

/// Arc interval `[start, start + length]` on the ring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcInterval {
    /// Canonical start, `[0, C)`.
    pub start: f64,
    /// Non-negative length; `>= C` covers the whole ring.
    pub length: f64,
}

impl ArcInterval {
    /// Interval centred on `center` reaching `radius` either way.
    pub fn around(center: f64, radius: f64) -> Self {
        let radius = radius.max(0.0);
        Self {
            start: wrap_arc_length(center - radius),
            length: 2.0 * radius,
        }
    }
    /// Canonical end position.
    pub fn end(&self) -> f64 {
        wrap_arc_length(self.start + self.length)
    }
    pub fn is_full(&self) -> bool {
        self.length >= RING_CIRCUMFERENCE
    }
    /// True when the interval crosses the seam at `s = 0`.
    pub fn wraps(&self) -> bool {
        self.is_full() || self.start + self.length >= RING_CIRCUMFERENCE
    }
    pub fn contains(&self, s: f64) -> bool {
        self.is_full() || modulo(s - self.start, RING_CIRCUMFERENCE) <= self.length
    }
}

/// Region around a viewer used to query zones and structures.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub s: ArcInterval,
    pub r: (f64, f64),
    pub z: (f64, f64),
}

impl ViewBounds {
    pub fn contains(&self, p: RingArc) -> bool {
        self.s.contains(p.s)
            && (self.r.0..=self.r.1).contains(&p.r)
            && (self.z.0..=self.z.1).contains(&p.z)
    }
}

/// Bounds `radius_m` along the ring and `width_m` across it around `viewer`.
///
/// `width_m <= 0` means [`DEFAULT_VIEW_WIDTH`]. The radial band is clamped to
/// `±MAX_RADIAL_EXTENT`.
pub fn view_bounds(viewer: RingArc, radius_m: f64, width_m: f64) -> ViewBounds {
    let width = if width_m > 0.0 { width_m } else { DEFAULT_VIEW_WIDTH };
    let half = width / 2.0;
    ViewBounds {
        s: ArcInterval::around(viewer.s, radius_m),
        r: (
            (viewer.r - half).max(-MAX_RADIAL_EXTENT),
            (viewer.r + half).min(MAX_RADIAL_EXTENT),
        ),
        z: (viewer.z - half, viewer.z + half),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::HALF_CIRCUMFERENCE;
    use proptest::prelude::*;

    const C: f64 = RING_CIRCUMFERENCE;

    fn ulp(x: f64) -> f64 {
        let x = x.abs();
        f64::from_bits(x.to_bits() + 1) - x
    }

    /// Distance on the ring: the seam makes `C - ε` and 0 neighbours.
    fn ring_gap(a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        d.min(C - d)
    }

    #[test]
    fn seam_round_trip() {
        let v = C - 100.0;
        let rel = normalize_relative_to_camera(100.0, v);
        assert_eq!(rel, C + 100.0);
        assert_eq!(camera_offset(100.0, v), 200.0);
        assert_eq!(denormalize_from_camera(rel, v), 100.0);

        // Viewer itself given outside the canonical range.
        let v2 = -100.0;
        let rel2 = normalize_relative_to_camera(C - 300.0, v2);
        assert_eq!(rel2, -300.0);
        assert_eq!(denormalize_from_camera(rel2, v2), C - 300.0);
    }

    #[test]
    fn offset_never_exceeds_half() {
        let v = 10.0;
        let rel = normalize_relative_to_camera(10.0 + HALF_CIRCUMFERENCE + 1.0, v);
        assert!((rel - v).abs() <= HALF_CIRCUMFERENCE);
        assert_eq!(rel, 10.0 - HALF_CIRCUMFERENCE + 1.0);
    }

    #[test]
    fn interval_membership_across_seam() {
        let iv = ArcInterval::around(100.0, 500.0);
        assert_eq!(iv.start, C - 400.0);
        assert_eq!(iv.end(), 600.0);
        assert!(iv.wraps());
        assert!(iv.contains(0.0));
        assert!(iv.contains(C - 400.0));
        assert!(iv.contains(600.0));
        assert!(!iv.contains(601.0));
        assert!(!iv.contains(C - 401.0));

        let plain = ArcInterval::around(10_000.0, 10.0);
        assert!(!plain.wraps());
        assert!(plain.contains(10_005.0));

        let full = ArcInterval::around(0.0, C);
        assert!(full.is_full() && full.contains(HALF_CIRCUMFERENCE));
    }

    #[test]
    fn bounds_default_width_and_clamp() {
        let b = view_bounds(RingArc::new(50.0, 2000.0, 3.0), 1000.0, 0.0);
        assert_eq!(b.r, (-500.0, MAX_RADIAL_EXTENT));
        assert_eq!(b.z, (3.0 - 2500.0, 3.0 + 2500.0));
        assert!(b.contains(RingArc::new(C - 900.0, 0.0, 0.0)));
        assert!(!b.contains(RingArc::new(C - 1100.0, 0.0, 0.0)));
        assert!(!b.contains(RingArc::new(60.0, -600.0, 0.0)));
    }

    proptest! {
        #[test]
        fn integer_round_trip_is_exact(p in -2_000_000_000i64..2_000_000_000, v in -2_000_000_000i64..2_000_000_000) {
            let (p, v) = (p as f64, v as f64);
            let rel = normalize_relative_to_camera(p, v);
            prop_assert!((rel - v).abs() <= HALF_CIRCUMFERENCE);
            prop_assert_eq!(denormalize_from_camera(rel, v), wrap_arc_length(p));
        }

        #[test]
        fn fractional_round_trip_on_the_ring(p in 0.0f64..C, v in 0.0f64..C) {
            let back = denormalize_from_camera(normalize_relative_to_camera(p, v), v);
            prop_assert!(ring_gap(back, wrap_arc_length(p)) <= 4.0 * ulp(C));
        }

        #[test]
        fn fractional_round_trip(p in -1.0e9f64..1.0e9, v in -1.0e9f64..1.0e9) {
            let back = denormalize_from_camera(normalize_relative_to_camera(p, v), v);
            let scale = p.abs().max(v.abs()).max(C);
            prop_assert!(ring_gap(back, wrap_arc_length(p)) <= 4.0 * ulp(scale));
        }
    }
}
