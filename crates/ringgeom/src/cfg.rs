//! Ring constants (compile-time).
//!
//! Policy
//! - These never change at runtime. The integer definitions are the source of
//!   truth so the chunk tiling invariant can be checked by the compiler; the
//!   `f64` mirrors are what the arithmetic uses.

/// Ring circumference in whole meters (264,000 km).
pub const RING_CIRCUMFERENCE_M: u64 = 264_000_000;
/// Chunk length in whole meters (1 km).
pub const CHUNK_LENGTH_M: u64 = 1_000;
/// Number of chunks around the ring.
pub const CHUNK_COUNT: u32 = (RING_CIRCUMFERENCE_M / CHUNK_LENGTH_M) as u32;

const _: () = assert!(CHUNK_COUNT as u64 * CHUNK_LENGTH_M == RING_CIRCUMFERENCE_M);

/// Ring circumference in meters.
pub const RING_CIRCUMFERENCE: f64 = RING_CIRCUMFERENCE_M as f64;
/// Half the circumference; the largest offset a wrapped delta can have.
pub const HALF_CIRCUMFERENCE: f64 = RING_CIRCUMFERENCE / 2.0;
/// Chunk length in meters.
pub const CHUNK_LENGTH: f64 = CHUNK_LENGTH_M as f64;

/// Ring centerline distance from Earth's center (geostationary radius), meters.
pub const RING_ORBITAL_RADIUS: f64 = 42_164_000.0;
/// WGS84 equatorial radius, meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;
/// Kongo Hub altitude above Earth's surface, meters.
pub const KONGO_HUB_ALTITUDE: f64 = 500_000.0;
/// Kongo Hub distance from Earth's center, meters.
pub const KONGO_HUB_RADIUS: f64 = EARTH_RADIUS + KONGO_HUB_ALTITUDE;

/// Engine-frame height of one floor, meters.
pub const DEFAULT_FLOOR_HEIGHT: f64 = 20.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_tiling_is_exact_in_f64() {
        assert_eq!(CHUNK_COUNT, 264_000);
        assert_eq!(CHUNK_COUNT as f64 * CHUNK_LENGTH, RING_CIRCUMFERENCE);
        assert_eq!(HALF_CIRCUMFERENCE * 2.0, RING_CIRCUMFERENCE);
    }
}
