//! Test fixture loader for golden retrieval scenarios.
//!
//! Fixtures live under `test-fixtures/golden/` at the workspace root and are
//! shared by tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
pub fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// A stored incident in a golden scenario. Vectors are given explicitly so
/// expected rankings do not depend on any embedding provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldenIncident {
    pub id: String,
    pub description: String,
    pub service: String,
    pub environment: String,
    pub root_cause_summary: String,
    #[serde(default)]
    pub patch_diff: Option<String>,
    pub embedding: Vec<f32>,
}

/// One query against the scenario's incidents and its expected outcome.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldenQuery {
    pub name: String,
    pub service: String,
    pub environment: String,
    pub embedding: Vec<f32>,
    pub expected_ids: Vec<String>,
    /// "low", "medium", or "high".
    pub expected_confidence: String,
    #[serde(default)]
    pub expected_patch: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub dimensions: usize,
    pub incidents: Vec<GoldenIncident>,
    pub queries: Vec<GoldenQuery>,
}

/// Load every scenario under `golden/retrieval/`.
pub fn load_retrieval_scenarios() -> Vec<(String, GoldenScenario)> {
    list_fixtures("golden/retrieval")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let scenario = load_fixture(&format!("golden/retrieval/{name}"));
            (name, scenario)
        })
        .collect()
}
