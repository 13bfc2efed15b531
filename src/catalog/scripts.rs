use std::path::Path;

use tracing::debug;

use crate::catalog::CatalogError;

/// Default location of the parsed script directory
pub const DEFAULT_SCRIPT_DIR: &str = "parsed";

/// Extension of parsed script documents
pub const SCRIPT_EXTENSION: &str = "json";

/// Enumerate script identifiers in a directory.
///
/// The scan is non-recursive: each direct entry with the `json` extension
/// contributes its filename stem as an identifier. Other files and
/// subdirectories are skipped. Order is whatever the directory iteration
/// yields; callers must not assume it is sorted.
///
/// # Errors
///
/// Returns [`CatalogError::Read`] if the directory cannot be read.
pub fn load_scripts(dir: &Path) -> Result<Vec<String>, CatalogError> {
    let mut scripts = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.extension().and_then(|e| e.to_str()) != Some(SCRIPT_EXTENSION) {
            continue;
        }
        if !path.is_file() {
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            scripts.push(stem.to_string());
        }
    }

    debug!("loaded {} scripts from {}", scripts.len(), dir.display());
    Ok(scripts)
}
