//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// JSON text of the sample API response used across the test suites.
pub const SAMPLE_RESPONSE: &str = r#"{"string":"asdf","number":1234,"boolean":true,"map":{"k":"v","n":1},"array":[1,2,"fdsa"]}"#;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Decoded form of [`SAMPLE_RESPONSE`].
pub fn sample_response() -> serde_json::Value {
	serde_json::from_str(SAMPLE_RESPONSE).expect("sample response is valid json")
}
