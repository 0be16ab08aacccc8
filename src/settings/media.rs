//! Media categories and file-suffix classification.
//!
//! Centralized location for the recognized image-file suffix groups and the
//! removable device-type codes. The groups are fixed literal data; the set of
//! acceptable suffixes is exactly their union.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};

/// Suffixes recognized as fixed hard-drive images.
pub const HARDDRIVE_FILE_SUFFIXES: &[&str] = &["hda", "hdn", "hdi", "nhd", "hdf", "hds", "dsk"];

/// Suffixes recognized as removable-media images.
pub const REMOVABLE_FILE_SUFFIXES: &[&str] = &["hdr"];

/// Suffixes recognized as CD-ROM images.
pub const CDROM_FILE_SUFFIXES: &[&str] = &["iso", "cdr", "toast", "img"];

/// Suffixes recognized as archives holding one or more images.
pub const ARCHIVE_FILE_SUFFIXES: &[&str] = &["zip"];

/// Device-type codes treated as removable media.
pub const REMOVABLE_DEVICE_TYPES: &[&str] = &["SCCD", "SCRM", "SCMO"];

/// Media category of a disk-image file, keyed by filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaCategory {
    HardDrive,
    Removable,
    CdRom,
    Archive,
}

impl MediaCategory {
    /// All categories, in union order.
    pub const ALL: [MediaCategory; 4] = [
        MediaCategory::HardDrive,
        MediaCategory::Removable,
        MediaCategory::CdRom,
        MediaCategory::Archive,
    ];

    /// The suffix group belonging to this category.
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            MediaCategory::HardDrive => HARDDRIVE_FILE_SUFFIXES,
            MediaCategory::Removable => REMOVABLE_FILE_SUFFIXES,
            MediaCategory::CdRom => CDROM_FILE_SUFFIXES,
            MediaCategory::Archive => ARCHIVE_FILE_SUFFIXES,
        }
    }

    /// Classify a bare file suffix (without the dot).
    ///
    /// Matching is ASCII case-insensitive, so `ISO` and `iso` classify the
    /// same. Returns `None` for suffixes outside every category.
    pub fn classify(suffix: &str) -> Option<MediaCategory> {
        MediaCategory::ALL.into_iter().find(|category| {
            category
                .suffixes()
                .iter()
                .any(|s| s.eq_ignore_ascii_case(suffix))
        })
    }

    /// Classify a path by its extension.
    ///
    /// Returns `None` when the path has no extension, the extension is not
    /// valid UTF-8, or the extension belongs to no category.
    pub fn for_path(path: &Path) -> Option<MediaCategory> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(MediaCategory::classify)
    }
}

/// All acceptable file suffixes, in category union order.
pub fn valid_suffixes() -> impl Iterator<Item = &'static str> {
    MediaCategory::ALL
        .into_iter()
        .flat_map(|category| category.suffixes().iter().copied())
}

/// Whether a bare file suffix names an acceptable file type.
pub fn is_valid_suffix(suffix: &str) -> bool {
    MediaCategory::classify(suffix).is_some()
}

/// Whether a device-type code identifies removable media.
///
/// Codes are exact identifiers (`SCCD`, `SCRM`, `SCMO`); matching is
/// case-sensitive.
pub fn is_removable_device_type(code: &str) -> bool {
    REMOVABLE_DEVICE_TYPES.contains(&code)
}

/// Verify that no suffix is claimed by more than one category.
///
/// Classification takes the first matching category, so an overlap would
/// silently shadow a group. Checked once during settings load.
pub(crate) fn ensure_disjoint_categories() -> Result<()> {
    let mut seen = HashSet::new();
    for category in MediaCategory::ALL {
        for &suffix in category.suffixes() {
            if !seen.insert(suffix) {
                return Err(SettingsError::OverlappingSuffix(suffix));
            }
        }
    }
    Ok(())
}
