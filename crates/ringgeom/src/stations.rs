//! Pillar hubs: the twelve elevator stations spaced evenly around the ring.
//!
//! Hub 0 is the Kongo Hub at `s = 0`; hub `i` sits at `i · 22,000 km`.

use std::fmt;

use crate::cfg::{KONGO_HUB_RADIUS, RING_CIRCUMFERENCE};
use crate::frames::{ring_arc_to_er0, ring_arc_to_ring_polar, Er0Point, RingArc, RingPolar};
use crate::wrap::arc_distance;

/// Number of pillar hubs.
pub const PILLAR_HUB_COUNT: usize = 12;
/// Arc-length spacing between neighbouring hubs, meters.
pub const PILLAR_HUB_SPACING: f64 = RING_CIRCUMFERENCE / PILLAR_HUB_COUNT as f64;

/// ER0 anchor of the Kongo Hub station (500 km above the equator on +X).
pub const KONGO_HUB_ER0: Er0Point = Er0Point {
    x: KONGO_HUB_RADIUS,
    y: 0.0,
    z: 0.0,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StationError {
    UnknownHub { index: usize },
}

impl fmt::Display for StationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationError::UnknownHub { index } => write!(
                f,
                "invalid hub index: {} (must be 0-{})",
                index,
                PILLAR_HUB_COUNT - 1
            ),
        }
    }
}

impl std::error::Error for StationError {}

/// Centerline position of hub `index`.
pub fn pillar_hub_arc(index: usize) -> Result<RingArc, StationError> {
    if index >= PILLAR_HUB_COUNT {
        return Err(StationError::UnknownHub { index });
    }
    Ok(RingArc::new(index as f64 * PILLAR_HUB_SPACING, 0.0, 0.0))
}

pub fn pillar_hub_polar(index: usize) -> Result<RingPolar, StationError> {
    pillar_hub_arc(index).map(ring_arc_to_ring_polar)
}

pub fn pillar_hub_er0(index: usize) -> Result<Er0Point, StationError> {
    pillar_hub_arc(index).map(ring_arc_to_er0)
}

/// Nearest hub to `s` and the wrapped distance to it. Ties go to the lower index.
pub fn nearest_pillar_hub(s: f64) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for index in 0..PILLAR_HUB_COUNT {
        let d = arc_distance(s, index as f64 * PILLAR_HUB_SPACING);
        if d < best.1 {
            best = (index, d);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::RING_ORBITAL_RADIUS;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn hub_positions() {
        assert_eq!(PILLAR_HUB_SPACING, 22_000_000.0);
        assert_eq!(pillar_hub_arc(0).unwrap().s, 0.0);
        assert_eq!(pillar_hub_arc(6).unwrap().s, 132_000_000.0);
        assert_eq!(pillar_hub_arc(12), Err(StationError::UnknownHub { index: 12 }));

        let p3 = pillar_hub_polar(3).unwrap();
        assert!((p3.theta - FRAC_PI_2).abs() < 1e-12);
        let e0 = pillar_hub_er0(0).unwrap();
        assert!((e0.x - RING_ORBITAL_RADIUS).abs() < 1e-6);
        assert!(KONGO_HUB_ER0.x < e0.x);
    }

    #[test]
    fn nearest_hub_wraps() {
        assert_eq!(nearest_pillar_hub(RING_CIRCUMFERENCE - 1000.0), (0, 1000.0));
        assert_eq!(nearest_pillar_hub(23_000_000.0), (1, 1_000_000.0));
        let (idx, d) = nearest_pillar_hub(-5.0);
        assert_eq!((idx, d), (0, 5.0));
    }
}
