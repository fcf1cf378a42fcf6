use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::Release;
use crate::error::{ReleaseCheckError, Result};

/// Manifest file name looked up when none is configured
pub const DEFAULT_MANIFEST_PATH: &str = "releases.toml";

/// On-disk shape of the releases manifest: a flat list of `[[release]]`
/// tables, each with a `version` and a `url` key.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    release: Vec<Release>,
}

/// Load the releases manifest from a TOML file.
///
/// Entries are returned in file order; the selector relies on that order for
/// its first-wins tie-break. An empty manifest is valid and yields an empty
/// list. Version strings are NOT validated here - a malformed entry is the
/// selector's problem, so one bad record never hides the rest of the file.
///
/// # Arguments
/// * `path` - Path to the manifest file
///
/// # Returns
/// * `Ok(Vec<Release>)` - Releases in file order
/// * `Err` - If the file cannot be read or is not valid manifest TOML
pub fn load_manifest(path: &Path) -> Result<Vec<Release>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ReleaseCheckError::manifest(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    let manifest: ManifestFile = toml::from_str(&contents).map_err(|e| {
        ReleaseCheckError::manifest(format!("Cannot parse '{}': {}", path.display(), e))
    })?;

    Ok(manifest.release)
}
