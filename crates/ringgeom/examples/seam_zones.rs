//! Print what wrap normalization does to zones drawn across the seam.
//!
//! Usage:
//!   cargo run -p ringgeom --example seam_zones
//!   cargo run -p ringgeom --example seam_zones -- 20
//!
//! Draws seeded zones in every storage style and prints their raw x extent,
//! the normalized extent, and the measured vs. exact area.

use ringgeom::api::{detect_wrap, normalize_for_intersection, polygon_area};
use ringgeom::zone::sample::{draw_zone, ReplayToken, ZoneSampleCfg};

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(6);
    let cfg = ZoneSampleCfg::default();
    let mut tok = ReplayToken { seed: 2025, index: 0 };
    for _ in 0..count {
        let z = draw_zone(cfg, tok);
        tok = tok.next();
        let Some(state) = detect_wrap(&z.polygon) else {
            continue;
        };
        match (normalize_for_intersection(&z.polygon), polygon_area(&z.polygon)) {
            (Ok(n), Ok(area)) => {
                let (lo, hi) = n.x_bounds().unwrap_or((f64::NAN, f64::NAN));
                println!(
                    "{:<18} raw x [{:.0}, {:.0}] wrapped={} -> [{:.0}, {:.0}] holes={} area={} exact={}",
                    format!("{:?}", z.style),
                    state.min_x,
                    state.max_x,
                    state.wrapped,
                    lo,
                    hi,
                    n.holes.len(),
                    area,
                    z.true_area
                );
            }
            (Err(e), _) | (_, Err(e)) => eprintln!("{:?}: {e}", z.style),
        }
    }
}
