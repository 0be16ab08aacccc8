//! Well-known filenames and derived paths for the image store.

use std::path::{Path, PathBuf};

/// Filename of the default configuration document.
pub const DEFAULT_CONFIG: &str = "default.json";

/// Filename of the canonical drive-properties document, resolved against the
/// working directory.
pub const DRIVE_PROPERTIES_FILENAME: &str = "drive_properties.json";

/// Filename suffix identifying per-drive properties files.
pub const PROPERTIES_SUFFIX: &str = "properties";

/// Path of the canonical drive-properties document under `home_dir`.
pub fn drive_properties_path(home_dir: &Path) -> PathBuf {
    home_dir.join(DRIVE_PROPERTIES_FILENAME)
}

/// Whether a path names a per-drive properties file.
pub fn is_properties_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == PROPERTIES_SUFFIX)
}
