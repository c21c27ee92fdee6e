//! Deterministic zone sampler for tests and benches.
//!
//! Model
//! - Draw an axis-aligned rectangle with integer-meter extents, optionally
//!   with a rectangular hole, in a frame where the seam sits at `x = 0`.
//! - Store it in one of three ways: away from the seam, split across both
//!   ends of `[0, C)`, or pushed past `C` as merged zones are.
//! - Integer extents keep the reference area exact.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Polygon, Ring};
use crate::cfg::{HALF_CIRCUMFERENCE, RING_CIRCUMFERENCE};
use crate::viewer::MAX_RADIAL_EXTENT;

/// How a sampled zone's x coordinates are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageStyle {
    /// Well inside `(0, C/2)`, never touching the seam.
    Plain,
    /// Straddles the seam: left part near `C`, right part near 0.
    Split,
    /// Straddles the seam with every x in `[C - a, C + b]`.
    PastCircumference,
}

#[derive(Clone, Copy, Debug)]
pub struct ZoneSampleCfg {
    /// Width range along the ring, meters. Clamped to at least 4.
    pub width: (u32, u32),
    /// Height range across the ring, meters. Clamped to `[4, 2·MAX_RADIAL_EXTENT]`.
    pub height: (u32, u32),
    /// Chance of carving a hole.
    pub hole_probability: f64,
    /// `None` picks a style at random.
    pub style: Option<StorageStyle>,
}

impl Default for ZoneSampleCfg {
    fn default() -> Self {
        Self {
            width: (10, 5_000),
            height: (10, 2_000),
            hole_probability: 0.3,
            style: None,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }

    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }
}

#[derive(Clone, Debug)]
pub struct SampledZone {
    pub polygon: Polygon,
    pub style: StorageStyle,
    /// Exact area with the hole removed.
    pub true_area: f64,
    /// Exact area of the exterior outline.
    pub outline_area: f64,
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Vector2<f64>> {
    vec![
        Vector2::new(x0, y0),
        Vector2::new(x1, y0),
        Vector2::new(x1, y1),
        Vector2::new(x0, y1),
    ]
}

fn range<R: Rng>(rng: &mut R, (lo, hi): (u32, u32), min: u32, max: u32) -> u32 {
    let lo = lo.clamp(min, max);
    let hi = hi.clamp(lo, max);
    rng.gen_range(lo..=hi)
}

pub fn draw_zone(cfg: ZoneSampleCfg, tok: ReplayToken) -> SampledZone {
    let mut rng = tok.to_std_rng();
    let max_height = (2.0 * MAX_RADIAL_EXTENT) as u32;
    let w = range(&mut rng, cfg.width, 4, 1_000_000);
    let h = range(&mut rng, cfg.height, 4, max_height);
    let style = cfg.style.unwrap_or_else(|| match rng.gen_range(0..3) {
        0 => StorageStyle::Plain,
        1 => StorageStyle::Split,
        _ => StorageStyle::PastCircumference,
    });

    // Seam frame: left edge at -a, right edge at w - a.
    let a = rng.gen_range(1..w);
    let x0 = -f64::from(a);
    let x1 = x0 + f64::from(w);
    let y0 = f64::from(rng.gen_range(0..=(max_height - h))) - MAX_RADIAL_EXTENT;
    let y1 = y0 + f64::from(h);

    let mut rings = vec![rect(x0, y0, x1, y1)];
    let mut hole_area = 0.0;
    if rng.gen_bool(cfg.hole_probability.clamp(0.0, 1.0)) {
        // Hole strictly inside, at least 1 m from every edge.
        let hw = rng.gen_range(1..=(w - 2));
        let hh = rng.gen_range(1..=(h - 2));
        let hx0 = x0 + f64::from(rng.gen_range(1..=(w - 1 - hw)));
        let hy0 = y0 + f64::from(rng.gen_range(1..=(h - 1 - hh)));
        rings.push(rect(hx0, hy0, hx0 + f64::from(hw), hy0 + f64::from(hh)));
        hole_area = f64::from(hw) * f64::from(hh);
    }

    let plain_offset = f64::from(rng.gen_range((w + 1_000)..=(HALF_CIRCUMFERENCE as u32 / 2)));
    let place = |x: f64| match style {
        StorageStyle::Plain => x + plain_offset,
        StorageStyle::Split if x < 0.0 => x + RING_CIRCUMFERENCE,
        StorageStyle::Split => x,
        StorageStyle::PastCircumference => x + RING_CIRCUMFERENCE,
    };
    let mut placed = rings
        .into_iter()
        .map(|pts| Ring::closed(pts).map_x(place));
    let exterior = placed.next().unwrap_or_default();
    let outline_area = f64::from(w) * f64::from(h);
    SampledZone {
        polygon: Polygon::new(exterior, placed.collect()),
        style,
        true_area: outline_area - hole_area,
        outline_area,
    }
}
