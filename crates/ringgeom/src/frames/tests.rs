use super::*;
use crate::cfg::{DEFAULT_FLOOR_HEIGHT, KONGO_HUB_RADIUS, RING_CIRCUMFERENCE, RING_ORBITAL_RADIUS};
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Relative closeness with a floor of 1 so values near zero compare absolutely.
fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}

/// Angle equality modulo 2π.
fn same_angle(a: f64, b: f64, tol: f64) -> bool {
    let d = (a - b).rem_euclid(TAU);
    d <= tol || TAU - d <= tol
}

#[test]
fn kongo_hub_sits_on_plus_x() {
    let e = ring_polar_to_er0(RingPolar::new(0.0, 0.0, 0.0));
    assert!(close(e.x, RING_ORBITAL_RADIUS, 1e-12));
    assert!(e.y.abs() < 1e-6 && e.z == 0.0);

    let p = er0_to_ring_polar(Er0Point::new(RING_ORBITAL_RADIUS, 0.0, 0.0));
    assert_eq!(p.theta, 0.0);
    assert!(p.r.abs() < 1e-6);
    // The hub station itself is well inside the ring radius.
    assert!(KONGO_HUB_RADIUS < RING_ORBITAL_RADIUS);
}

#[test]
fn quarter_turns_land_on_axes() {
    let east = ring_polar_to_er0(RingPolar::new(FRAC_PI_2, 0.0, 0.0));
    assert!(east.x.abs() < 1e-6);
    assert!(close(east.y, RING_ORBITAL_RADIUS, 1e-12));

    let opposite = er0_to_ring_polar(Er0Point::new(-RING_ORBITAL_RADIUS, 0.0, 0.0));
    // atan2(+0, -R) = π, wrapped to the canonical -π.
    assert_eq!(opposite.theta, -PI);
}

#[test]
fn rotation_axis_maps_to_zero_angle() {
    let p = er0_to_ring_polar(Er0Point::new(0.0, 0.0, 500.0));
    assert_eq!(p.theta, 0.0);
    assert_eq!(p.r, -RING_ORBITAL_RADIUS);
    assert_eq!(p.z, 500.0);
}

#[test]
fn arc_polar_representative_grid_round_trips() {
    let thetas = [0.0, FRAC_PI_2, PI, -FRAC_PI_2];
    let radials = [0.0, 1000.0, -1000.0];
    let verticals = [0.0, 500.0, -500.0];
    for &theta in &thetas {
        for &r in &radials {
            for &z in &verticals {
                let p = RingPolar::new(theta, r, z);
                let arc = ring_polar_to_ring_arc(p);
                assert!((0.0..RING_CIRCUMFERENCE).contains(&arc.s));
                let back = ring_arc_to_ring_polar(arc);
                assert!(same_angle(back.theta, theta, 1e-12), "theta {theta} -> {}", back.theta);
                assert!((-PI..PI).contains(&back.theta));
                assert_eq!(back.r, r);
                assert_eq!(back.z, z);
            }
        }
    }
}

#[test]
fn negative_arc_length_maps_to_negative_angle() {
    let p = ring_arc_to_ring_polar(RingArc::new(-RING_CIRCUMFERENCE / 4.0, 0.0, 0.0));
    assert!((p.theta + FRAC_PI_2).abs() < 1e-12);
    let a = ring_polar_to_ring_arc(p);
    assert!(close(a.s, 0.75 * RING_CIRCUMFERENCE, 1e-12));
}

#[test]
fn legacy_shares_the_arc_convention() {
    let l = LegacyPoint::on_floor(RING_CIRCUMFERENCE / 2.0, 120.0, 3);
    let p = legacy_to_ring_polar(l);
    assert!(same_angle(p.theta, PI, 1e-12));
    assert_eq!(p.r, 120.0);
    assert_eq!(p.z, 3.0);
    let back = ring_polar_to_legacy(p);
    assert!(close(back.x, l.x, 1e-12));
    assert_eq!(back.floor(), 3);

    let arc = legacy_to_ring_arc(LegacyPoint::new(-1000.0, 0.0, 0.0));
    assert!(close(arc.s, RING_CIRCUMFERENCE - 1000.0, 1e-12));
    let legacy = ring_arc_to_legacy(arc);
    assert!(close(legacy.x, RING_CIRCUMFERENCE - 1000.0, 1e-12));
}

#[test]
fn engine_scales_floors_and_swaps_axes() {
    let frame = EngineFrame::default();
    assert_eq!(frame.floor_height, DEFAULT_FLOOR_HEIGHT);
    let e = ring_arc_to_engine(RingArc::new(100.0, 5.0, 3.0), 20.0);
    assert_eq!(e, EnginePoint::new(100.0, 60.0, 5.0));
    let a = engine_to_ring_arc(e, 20.0);
    assert_eq!(a, RingArc::new(100.0, 5.0, 3.0));

    let e2 = engine_to_ring_arc(EnginePoint::new(-50.0, 0.0, 0.0), 4.0);
    assert_eq!(e2.s, RING_CIRCUMFERENCE - 50.0);

    let verts = [LegacyPoint::on_floor(10.0, 1.0, 2), LegacyPoint::on_floor(20.0, -1.0, 0)];
    let out = legacy_vertices_to_engine(&verts, 20.0);
    assert_eq!(out.len(), 2);
    assert!(close(out[0].x, 10.0, 1e-9));
    assert_eq!(out[0].y, 40.0);
    assert_eq!(out[1].z, -1.0);
}

#[test]
fn composites_are_chains() {
    let e = Er0Point::new(1.0e7, -4.0e7, 123.0);
    let fh = 7.5;
    assert_eq!(er0_to_engine(e, fh), ring_arc_to_engine(er0_to_ring_arc(e), fh));
    let frame = EngineFrame::new(fh);
    assert_eq!(frame.from_er0(e), er0_to_engine(e, fh));
    let back = frame.to_er0(frame.from_er0(e));
    assert!(close(back.x, e.x, 1e-9) && close(back.y, e.y, 1e-9));
    assert!(close(back.z, e.z, 1e-12));

    let l = LegacyPoint::on_floor(5_000.0, 30.0, 1);
    assert_eq!(frame.from_legacy(l), legacy_to_engine(l, fh));
    assert_eq!(frame.to_legacy(frame.from_legacy(l)).floor(), 1);
}

#[test]
fn relative_engine_points_straddle_the_seam() {
    let frame = EngineFrame::default();
    let e = frame.to_engine_relative(RingArc::new(50.0, 2.0, 1.0), RING_CIRCUMFERENCE - 50.0);
    assert_eq!(e.x, 100.0);
    assert_eq!(e.y, DEFAULT_FLOOR_HEIGHT);
    assert_eq!(e.z, 2.0);

    // Only x differs from the absolute engine point, for any floor height.
    let frame = EngineFrame::new(3.5);
    let a = RingArc::new(-1_234.5, -7.25, 4.0);
    let abs = frame.from_arc(a);
    let rel = frame.to_engine_relative(a, 10.0);
    assert_eq!((rel.y, rel.z), (abs.y, abs.z));
    assert_eq!(rel.x, -1_244.5);
    assert_eq!(frame.to_arc(rel).z, a.z);
}

#[test]
fn validation_reports_every_bad_field() {
    assert!(RingPolar::new(0.1, 2.0, 3.0).validate().is_ok());
    let err = RingPolar::new(f64::NAN, 0.0, f64::INFINITY)
        .validate()
        .unwrap_err();
    let names: Vec<_> = err.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["theta", "z"]);
    assert!(err.to_string().contains("2 field(s)"));

    let err = Er0Point::new(f64::NEG_INFINITY, f64::NAN, f64::NAN)
        .validate()
        .unwrap_err();
    assert_eq!(err.fields.len(), 3);

    assert!(validate_floor_height(DEFAULT_FLOOR_HEIGHT).is_ok());
    assert!(validate_floor_height(0.0).is_err());
    assert!(validate_floor_height(f64::NAN).is_err());
}

proptest! {
    #[test]
    fn er0_polar_round_trip(
        theta in -PI..PI,
        r in -1.0e5f64..1.0e5,
        z in -1.0e5f64..1.0e5,
    ) {
        let p = RingPolar::new(theta, r, z);
        let back = er0_to_ring_polar(ring_polar_to_er0(p));
        prop_assert!(same_angle(back.theta, theta, 1e-9));
        prop_assert!(close(back.r, r, 1e-6));
        prop_assert!(close(back.z, z, 1e-12));
    }

    #[test]
    fn arc_outputs_are_canonical(s in -1.0e10f64..1.0e10, r in -1.0e4f64..1.0e4) {
        let p = ring_arc_to_ring_polar(RingArc::new(s, r, 0.0));
        prop_assert!((-PI..PI).contains(&p.theta));
        let a = ring_polar_to_ring_arc(p);
        prop_assert!((0.0..RING_CIRCUMFERENCE).contains(&a.s));
    }
}
