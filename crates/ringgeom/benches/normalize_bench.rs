//! Criterion benches for zone wrap normalization, area, and overlap.
//! Inputs come from the seeded zone sampler (all storage styles, some holes).

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ringgeom::api::{merge_polygons, normalize_for_intersection, polygon_area, polygons_overlap, ZoneCfg};
use ringgeom::zone::sample::{draw_zone, ReplayToken, StorageStyle, ZoneSampleCfg};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("zone");
    let styles = [
        ("plain", StorageStyle::Plain),
        ("split", StorageStyle::Split),
        ("past_c", StorageStyle::PastCircumference),
    ];
    for (label, style) in styles {
        let cfg = ZoneSampleCfg {
            style: Some(style),
            ..ZoneSampleCfg::default()
        };
        group.bench_function(BenchmarkId::new("normalize_for_intersection", label), |b| {
            b.iter_batched(
                || ReplayToken { seed: 42, index: 0 },
                |mut tok| {
                    tok.index = tok.index.wrapping_add(1);
                    let z = draw_zone(cfg, tok);
                    let _ = black_box(normalize_for_intersection(&z.polygon));
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(BenchmarkId::new("polygon_area", label), |b| {
            let z = draw_zone(cfg, ReplayToken { seed: 7, index: 1 });
            b.iter(|| black_box(polygon_area(&z.polygon)))
        });
    }

    let cfg = ZoneSampleCfg::default();
    group.bench_function("polygons_overlap", |b| {
        let a = draw_zone(cfg, ReplayToken { seed: 3, index: 0 }).polygon;
        let other = draw_zone(cfg, ReplayToken { seed: 3, index: 1 }).polygon;
        b.iter(|| black_box(polygons_overlap(&a, &other, 1e-3)))
    });
    group.bench_function("merge_polygons", |b| {
        let split = ZoneSampleCfg {
            style: Some(StorageStyle::Split),
            hole_probability: 0.0,
            ..cfg
        };
        let polys: Vec<_> = (0..4)
            .map(|index| draw_zone(split, ReplayToken { seed: 5, index }).polygon)
            .collect();
        let zone_cfg = ZoneCfg::default();
        b.iter(|| black_box(merge_polygons(&polys, &zone_cfg)))
    });
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
