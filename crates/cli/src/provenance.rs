use anyhow::{Context, Result};
use ringgeom::cfg::{
    CHUNK_COUNT, CHUNK_LENGTH, DEFAULT_FLOOR_HEIGHT, RING_CIRCUMFERENCE, RING_ORBITAL_RADIUS,
};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: command parameters and the files it read.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, path: impl Into<String>) -> Self {
        self.inputs.push(path.into());
        self
    }
}

/// Ring constants baked into this build; recorded so outputs stay comparable.
pub fn ring_constants() -> Value {
    json!({
        "ring_circumference_m": RING_CIRCUMFERENCE,
        "chunk_length_m": CHUNK_LENGTH,
        "chunk_count": CHUNK_COUNT,
        "ring_orbital_radius_m": RING_ORBITAL_RADIUS,
        "default_floor_height_m": DEFAULT_FLOOR_HEIGHT,
    })
}

/// Record how `artifact` was made in `<stem>.provenance.json` beside it.
///
/// The artifact is written first, so its directory already exists.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let at = Location::caller();
    let sidecar = provenance_path(artifact);
    let doc = json!({
        "code_rev": current_git_rev(),
        "ringgeom_version": ringgeom::VERSION,
        "callsite": format!("{}:{}", at.file(), at.line()),
        "constants": ring_constants(),
        "params": payload.params,
        "inputs": payload.inputs,
        "outputs": [artifact.display().to_string()],
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    tracing::debug!(path = %sidecar.display(), "provenance sidecar");
    Ok(sidecar)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    from_env
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status.success().then(|| String::from_utf8_lossy(&out.stdout).trim().to_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        let derived = provenance_path(Path::new("/tmp/zones/merged.json"));
        assert_eq!(derived, Path::new("/tmp/zones/merged.provenance.json"));
        assert_eq!(
            provenance_path(Path::new("out/pieces")),
            Path::new("out/pieces.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_constants_and_inputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("points.csv");
        fs::write(&artifact, "s,r,z\n").unwrap();
        let payload = Payload::new(json!({"floor_height": 20.0})).with_input("in.csv");
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.display().to_string());
        assert!(parsed["callsite"].as_str().unwrap().contains("provenance.rs"));
        assert_eq!(parsed["inputs"][0], "in.csv");
        assert_eq!(parsed["constants"]["chunk_count"], 264_000);
        assert_eq!(parsed["params"]["floor_height"], 20.0);
    }
}
