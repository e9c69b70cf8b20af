//! Shared helpers for compatibility block integration tests.

use std::fs;
use std::path::PathBuf;

use compat_table::CompatibilityExtension;
use compat_table::markdown::Pipeline;

/// Loads a markdown fixture from `tests/fixtures/`.
///
/// ## Panics
///
/// Panics if the fixture file cannot be read.
pub fn load_fixture(path: &str) -> String {
    let mut fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    fixture_path.push("tests");
    fixture_path.push("fixtures");
    fixture_path.push(path);

    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {:?}: {}",
            fixture_path.display(),
            e
        )
    })
}

/// A pipeline with the compatibility extension installed using default options.
#[allow(dead_code)]
pub fn pipeline() -> Pipeline {
    Pipeline::new().with_extension(CompatibilityExtension::default())
}
