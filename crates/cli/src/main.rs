use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ringgeom::api::*;
use ringgeom::cfg::DEFAULT_FLOOR_HEIGHT;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "ringgeom")]
#[command(about = "Ring coordinate conversions, chunking, and wrap-safe zone geometry")]
struct Cmd {
    /// Engine floor height in meters, used wherever engine coordinates appear
    #[arg(long, global = true, default_value_t = DEFAULT_FLOOR_HEIGHT)]
    floor_height: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convert one point between frames and print it as JSON
    Convert {
        #[arg(long, value_enum)]
        from: Frame,
        #[arg(long, value_enum)]
        to: Frame,
        /// Three coordinates in the `from` frame's field order
        #[arg(num_args = 3, allow_negative_numbers = true, required = true)]
        coords: Vec<f64>,
        /// Re-base engine x on this viewer arc length
        #[arg(long, allow_negative_numbers = true)]
        viewer: Option<f64>,
    },
    /// Chunk index for an arc length, or the extent of a chunk index
    Chunk {
        #[arg(long, allow_negative_numbers = true, conflicts_with = "index")]
        s: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        index: Option<i64>,
    },
    /// Chunk ids within a radius of a viewer
    Window {
        #[arg(long, allow_negative_numbers = true)]
        s: f64,
        #[arg(long, default_value_t = 5_000.0)]
        radius: f64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        floor: i32,
    },
    /// Wrap-normalize a polygon JSON file and print it with its area
    Normalize {
        #[arg(long)]
        input: PathBuf,
        /// Use the outline-only variant (holes dropped)
        #[arg(long)]
        area_only: bool,
    },
    /// Compare two polygon JSON files
    Overlap {
        #[arg(long)]
        a: PathBuf,
        #[arg(long)]
        b: PathBuf,
        #[arg(long, default_value_t = ZoneCfg::default().eps_area)]
        eps: f64,
    },
    /// Merge a JSON array of polygons into one stored polygon
    Merge {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Cut one polygon out of another; writes a JSON array of the pieces
    Subtract {
        #[arg(long)]
        target: PathBuf,
        #[arg(long)]
        cutter: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Convert a CSV of ring-arc points (s, r, z) in bulk
    Batch {
        #[arg(long)]
        input: PathBuf,
        /// Output path, `.csv` or `.parquet`
        #[arg(long)]
        out: PathBuf,
    },
    /// Print build provenance and ring constants
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Frame {
    /// Earth-centred Cartesian (x, y, z)
    Er0,
    /// Ring polar (theta, r, z)
    Polar,
    /// Ring arc (s, r, z)
    Arc,
    /// Legacy stored (x, y, floor)
    Legacy,
    /// Engine (x, y, z)
    Engine,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    validate_floor_height(cmd.floor_height).context("--floor-height")?;
    let frame = EngineFrame::new(cmd.floor_height);
    match cmd.action {
        Action::Convert {
            from,
            to,
            coords,
            viewer,
        } => {
            let out = convert(frame, from, to, &coords, viewer)?;
            print_json(&out)
        }
        Action::Chunk { s, index } => print_json(&chunk(s, index)?),
        Action::Window { s, radius, floor } => {
            tracing::info!(s, radius, floor, "window");
            let ids: Vec<String> = chunk_ids_in_window(floor, s, radius)
                .iter()
                .map(ToString::to_string)
                .collect();
            print_json(&json!({ "count": ids.len(), "chunks": ids }))
        }
        Action::Normalize { input, area_only } => print_json(&normalize(&input, area_only)?),
        Action::Overlap { a, b, eps } => print_json(&overlap(&a, &b, eps)?),
        Action::Merge { input, out } => merge(&input, &out),
        Action::Subtract {
            target,
            cutter,
            out,
        } => subtract(&target, &cutter, &out),
        Action::Batch { input, out } => {
            tracing::info!(input = %input.display(), out = %out.display(), "batch");
            let stats = batch::run(&input, &out, frame)?;
            let payload = Payload::new(json!({
                "floor_height": cmd.floor_height,
                "rows": stats.rows,
                "invalid_rows": stats.invalid,
                "derived_columns": batch::DERIVED,
            }))
            .with_input(input.to_string_lossy());
            provenance::write_sidecar(&out, payload)?;
            Ok(())
        }
        Action::Report => print_json(&report()),
    }
}

fn print_json(v: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(v)?);
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Finite numbers, closed rings, coordinates on the ring.
fn check_polygon(poly: &Polygon) -> Result<()> {
    poly.validate()?;
    validate_zone_geometry(poly)?;
    Ok(())
}

fn read_polygon(path: &Path) -> Result<Polygon> {
    let poly: Polygon = read_json(path)?;
    check_polygon(&poly).with_context(|| format!("validating {}", path.display()))?;
    Ok(poly)
}

fn write_json_artifact<T: serde::Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}

/// Parse `coords` as a point in `from`, route it through the ring-arc frame.
fn to_arc(frame: EngineFrame, from: Frame, [a, b, c]: [f64; 3]) -> Result<RingArc> {
    let arc = match from {
        Frame::Er0 => {
            let p = Er0Point::new(a, b, c);
            p.validate()?;
            er0_to_ring_arc(p)
        }
        Frame::Polar => {
            let p = RingPolar::new(a, b, c);
            p.validate()?;
            ring_polar_to_ring_arc(p)
        }
        Frame::Arc => {
            let p = RingArc::new(a, b, c);
            p.validate()?;
            p
        }
        Frame::Legacy => {
            let p = LegacyPoint::new(a, b, c);
            p.validate()?;
            legacy_to_ring_arc(p)
        }
        Frame::Engine => {
            let p = EnginePoint::new(a, b, c);
            p.validate()?;
            frame.to_arc(p)
        }
    };
    Ok(arc)
}

fn convert(
    frame: EngineFrame,
    from: Frame,
    to: Frame,
    coords: &[f64],
    viewer: Option<f64>,
) -> Result<Value> {
    let coords: [f64; 3] = match coords {
        [a, b, c] => [*a, *b, *c],
        _ => bail!("expected 3 coordinates, got {}", coords.len()),
    };
    if viewer.is_some() && to != Frame::Engine {
        bail!("--viewer only applies to --to engine");
    }
    let arc = to_arc(frame, from, coords)?;
    tracing::info!(?from, ?to, s = arc.s, "convert");
    let out = match to {
        Frame::Er0 => serde_json::to_value(ring_arc_to_er0(arc))?,
        Frame::Polar => serde_json::to_value(ring_arc_to_ring_polar(arc))?,
        Frame::Arc => serde_json::to_value(arc)?,
        Frame::Legacy => serde_json::to_value(ring_arc_to_legacy(arc))?,
        Frame::Engine => match viewer {
            Some(v) => serde_json::to_value(frame.to_engine_relative(arc, v))?,
            None => serde_json::to_value(frame.from_arc(arc))?,
        },
    };
    Ok(out)
}

fn chunk(s: Option<f64>, index: Option<i64>) -> Result<Value> {
    match (s, index) {
        (Some(s), None) => {
            let idx = arc_to_chunk_index(s);
            let (min, max) = chunk_index_to_range(i64::from(idx.get()));
            Ok(json!({ "s": s, "chunk": idx.get(), "range": [min, max] }))
        }
        (None, Some(index)) => {
            let idx = validate_chunk_index(index)?;
            let (min, max) = chunk_index_to_range(index);
            Ok(json!({
                "chunk": idx.get(),
                "center": chunk_index_to_arc(index).s,
                "range": [min, max],
            }))
        }
        _ => bail!("pass exactly one of --s or --index"),
    }
}

fn normalize(input: &Path, area_only: bool) -> Result<Value> {
    let poly = read_polygon(input)?;
    let state = detect_wrap(&poly).context("polygon has an empty exterior ring")?;
    let (normalized, area) = if area_only {
        (normalize_for_area(&poly)?, outline_area(&poly)?)
    } else {
        (normalize_for_intersection(&poly)?, polygon_area(&poly)?)
    };
    tracing::info!(wrapped = state.wrapped, span = state.span, area, "normalize");
    Ok(json!({
        "wrap": {
            "min_x": state.min_x,
            "max_x": state.max_x,
            "span": state.span,
            "wrapped": state.wrapped,
        },
        "polygon": normalized,
        "area": area,
    }))
}

fn overlap(a: &Path, b: &Path, eps: f64) -> Result<Value> {
    let pa = read_polygon(a)?;
    let pb = read_polygon(b)?;
    let area = intersection_area(&pa, &pb)?;
    let contact = classify_contact(&pa, &pb, eps)?;
    tracing::info!(area, ?contact, "overlap");
    Ok(json!({
        "contact": format!("{contact:?}").to_lowercase(),
        "intersection_area": area,
        "overlaps": contact == Contact::Overlapping,
    }))
}

fn merge(input: &Path, out: &Path) -> Result<()> {
    let polys: Vec<Polygon> = read_json(input)?;
    for (i, p) in polys.iter().enumerate() {
        check_polygon(p).with_context(|| format!("polygon {i}"))?;
    }
    let cfg = ZoneCfg::default();
    let merged = merge_polygons(&polys, &cfg)?;
    let area = polygon_area(&merged)?;
    tracing::info!(inputs = polys.len(), area, out = %out.display(), "merge");
    write_json_artifact(out, &merged)?;
    let payload = Payload::new(json!({
        "inputs": polys.len(),
        "eps_dedup": cfg.eps_dedup,
        "area": area,
    }))
    .with_input(input.to_string_lossy());
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn subtract(target: &Path, cutter: &Path, out: &Path) -> Result<()> {
    let t = read_polygon(target)?;
    let c = read_polygon(cutter)?;
    let cfg = ZoneCfg::default();
    let pieces = subtract_polygon(&t, &c, &cfg)?;
    let areas = pieces
        .iter()
        .map(polygon_area)
        .collect::<Result<Vec<_>, _>>()?;
    if pieces.is_empty() {
        tracing::warn!(path = %target.display(), "cutter covers the whole target");
    }
    tracing::info!(pieces = pieces.len(), ?areas, out = %out.display(), "subtract");
    write_json_artifact(out, &pieces)?;
    let payload = Payload::new(json!({
        "pieces": pieces.len(),
        "areas": areas,
        "eps_dedup": cfg.eps_dedup,
    }))
    .with_input(target.to_string_lossy())
    .with_input(cutter.to_string_lossy());
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Value {
    json!({
        "code_rev": provenance::current_git_rev(),
        "ringgeom_version": ringgeom::VERSION,
        "constants": provenance::ring_constants(),
        "pillar_hubs": (0..PILLAR_HUB_COUNT)
            .filter_map(|i| pillar_hub_arc(i).ok().map(|a| a.s))
            .collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringgeom::cfg::RING_CIRCUMFERENCE;
    use tempfile::tempdir;

    #[test]
    fn convert_routes_through_arc() {
        let frame = EngineFrame::default();
        let v = convert(frame, Frame::Arc, Frame::Engine, &[-50.0, 2.0, 1.0], None).unwrap();
        assert_eq!(v["x"], RING_CIRCUMFERENCE - 50.0);
        assert_eq!(v["y"], DEFAULT_FLOOR_HEIGHT);

        let rel = convert(
            frame,
            Frame::Arc,
            Frame::Engine,
            &[50.0, 0.0, 0.0],
            Some(RING_CIRCUMFERENCE - 50.0),
        )
        .unwrap();
        assert_eq!(rel["x"], 100.0);

        assert!(convert(frame, Frame::Arc, Frame::Er0, &[f64::NAN, 0.0, 0.0], None).is_err());
        assert!(convert(frame, Frame::Arc, Frame::Polar, &[0.0, 0.0, 0.0], Some(1.0)).is_err());
    }

    #[test]
    fn chunk_lookup_both_ways() {
        let v = chunk(Some(-1.0), None).unwrap();
        assert_eq!(v["chunk"], 263_999);
        let v = chunk(None, Some(3)).unwrap();
        assert_eq!(v["range"], json!([3000.0, 4000.0]));
        assert!(chunk(None, Some(1_000_000)).is_err());
        assert!(chunk(None, None).is_err());
    }

    #[test]
    fn zone_files_end_to_end() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        let c = RING_CIRCUMFERENCE;
        let seam = Polygon::new(
            Ring::from_xy(&[(c - 10.0, 0.0), (10.0, 0.0), (10.0, 20.0), (c - 10.0, 20.0)]),
            Vec::new(),
        );
        std::fs::write(&a, serde_json::to_vec(&seam).unwrap()).unwrap();
        std::fs::write(
            &b,
            serde_json::to_vec(&Polygon::rectangle(0.0, 0.0, 20.0, 20.0)).unwrap(),
        )
        .unwrap();

        let n = normalize(&a, false).unwrap();
        assert_eq!(n["wrap"]["wrapped"], true);
        assert_eq!(n["area"], 400.0);

        let o = overlap(&a, &b, 1e-3).unwrap();
        assert_eq!(o["contact"], "overlapping");

        let list = dir.path().join("list.json");
        std::fs::write(
            &list,
            serde_json::to_vec(&vec![
                Polygon::rectangle(c - 30.0, 0.0, c, 20.0),
                Polygon::rectangle(0.0, 0.0, 30.0, 20.0),
            ])
            .unwrap(),
        )
        .unwrap();
        let out = dir.path().join("merged/zone.json");
        merge(&list, &out).unwrap();
        let merged: Polygon = read_json(&out).unwrap();
        assert!((polygon_area(&merged).unwrap() - 1200.0).abs() < 1e-3);
        assert!(dir.path().join("merged/zone.provenance.json").exists());
    }

    #[test]
    fn subtract_writes_every_piece() {
        let dir = tempdir().unwrap();
        let c = RING_CIRCUMFERENCE;
        let target = dir.path().join("target.json");
        let cutter = dir.path().join("cutter.json");
        let seam = Polygon::new(
            Ring::from_xy(&[(c - 50.0, 0.0), (50.0, 0.0), (50.0, 20.0), (c - 50.0, 20.0)]),
            Vec::new(),
        );
        std::fs::write(&target, serde_json::to_vec(&seam).unwrap()).unwrap();
        std::fs::write(
            &cutter,
            serde_json::to_vec(&Polygon::rectangle(0.0, -5.0, 10.0, 25.0)).unwrap(),
        )
        .unwrap();
        let out = dir.path().join("cut/pieces.json");
        subtract(&target, &cutter, &out).unwrap();
        let pieces: Vec<Polygon> = read_json(&out).unwrap();
        assert_eq!(pieces.len(), 2);
        let total: f64 = pieces.iter().map(|p| polygon_area(p).unwrap()).sum();
        assert!((total - 1_800.0).abs() < 1e-6);
        assert!(dir.path().join("cut/pieces.provenance.json").exists());
    }

    #[test]
    fn malformed_zone_files_are_rejected() {
        let dir = tempdir().unwrap();
        let open = dir.path().join("open.json");
        std::fs::write(&open, r#"{"exterior": [[0,0],[5,0],[5,5],[0,5]]}"#).unwrap();
        let err = read_polygon(&open).unwrap_err();
        assert!(format!("{err:#}").contains("not closed"));

        let past = dir.path().join("past.json");
        let c = RING_CIRCUMFERENCE;
        std::fs::write(
            &past,
            serde_json::to_vec(&Polygon::rectangle(c - 10.0, 0.0, c + 10.0, 5.0)).unwrap(),
        )
        .unwrap();
        assert!(normalize(&past, false).is_err());

        let wide = dir.path().join("wide.json");
        std::fs::write(
            &wide,
            serde_json::to_vec(&Polygon::rectangle(0.0, 0.0, 10.0, 3_000.0)).unwrap(),
        )
        .unwrap();
        assert!(overlap(&wide, &open, 1e-3).is_err());
    }

    #[test]
    fn report_lists_hubs() {
        let r = report();
        assert_eq!(r["pillar_hubs"].as_array().unwrap().len(), 12);
        assert_eq!(r["constants"]["chunk_length_m"], 1000.0);
    }
}
