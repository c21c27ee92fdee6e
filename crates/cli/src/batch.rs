//! Bulk conversion of ring-arc point tables (CSV in, CSV or Parquet out).
//!
//! Input columns `s`, `r`, `z` (meters, any numeric type). Output keeps them
//! and appends the chunk index, the canonical arc length, ER0 coordinates,
//! and engine coordinates for the given floor height. Rows with a missing or
//! non-finite coordinate get nulls in every derived column.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use ringgeom::api::{
    arc_to_chunk_index, ring_arc_to_er0, wrap_arc_length, EngineFrame, RingArc, Validate,
};
use std::fs::File;
use std::path::Path;

/// Derived columns appended to the input.
pub const DERIVED: [&str; 8] = [
    "chunk", "s_wrapped", "er0_x", "er0_y", "er0_z", "engine_x", "engine_y", "engine_z",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub rows: usize,
    pub invalid: usize,
}

fn read_points(input: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(input)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .select([
            col("s").cast(DataType::Float64),
            col("r").cast(DataType::Float64),
            col("z").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns s, r, z from {}", input.display()))?;
    Ok(df)
}

/// Append the derived columns to `df` in place.
pub fn convert_frame(df: &mut DataFrame, frame: EngineFrame) -> Result<BatchStats> {
    let arcs: Vec<Option<RingArc>> = {
        let s = df.column("s")?.f64()?;
        let r = df.column("r")?.f64()?;
        let z = df.column("z")?.f64()?;
        s.into_iter()
            .zip(r)
            .zip(z)
            .map(|((s, r), z)| match (s, r, z) {
                (Some(s), Some(r), Some(z)) => {
                    let a = RingArc::new(s, r, z);
                    a.validate().ok().map(|_| a)
                }
                _ => None,
            })
            .collect()
    };
    let stats = BatchStats {
        rows: arcs.len(),
        invalid: arcs.iter().filter(|a| a.is_none()).count(),
    };

    let chunk: Vec<Option<u32>> = arcs
        .iter()
        .map(|a| a.map(|a| arc_to_chunk_index(a.s).get()))
        .collect();
    df.with_column(Series::new(DERIVED[0].into(), chunk))?;

    let mut columns: [Vec<Option<f64>>; 7] = Default::default();
    for a in &arcs {
        let values = a.map(|a| {
            let e = ring_arc_to_er0(a);
            let g = frame.from_arc(a);
            [wrap_arc_length(a.s), e.x, e.y, e.z, g.x, g.y, g.z]
        });
        for (i, column) in columns.iter_mut().enumerate() {
            column.push(values.map(|v| v[i]));
        }
    }
    for (name, values) in DERIVED[1..].iter().zip(columns) {
        df.with_column(Series::new((*name).into(), values))?;
    }
    Ok(stats)
}

fn write_points(df: &mut DataFrame, out: &Path) -> Result<()> {
    let parquet = match out.extension().and_then(|e| e.to_str()) {
        Some("parquet") => true,
        Some("csv") => false,
        other => bail!("unsupported output extension {:?} (use .csv or .parquet)", other),
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    if parquet {
        ParquetWriter::new(file).finish(df)?;
    } else {
        CsvWriter::new(file).include_header(true).finish(df)?;
    }
    Ok(())
}

/// Read `input`, convert, write `out`.
pub fn run(input: &Path, out: &Path, frame: EngineFrame) -> Result<BatchStats> {
    let mut df = read_points(input)?;
    let stats = convert_frame(&mut df, frame)?;
    if stats.invalid > 0 {
        tracing::warn!(invalid = stats.invalid, "rows with missing or non-finite coordinates");
    }
    write_points(&mut df, out)?;
    tracing::info!(rows = stats.rows, out = %out.display(), "batch written");
    Ok(stats)
}
