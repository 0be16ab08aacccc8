//! Configuration core for a disk-image management service.
//!
//! The service manages a directory of disk images attached to emulated SCSI
//! devices. This crate owns its process-wide configuration:
//!
//! - [`Settings`] — the immutable snapshot of environment-driven values
//!   (image-store root, size limit, derived paths), loaded once at startup
//!   and shared via [`settings()`].
//! - [`MediaCategory`] — classification of image files by suffix into hard
//!   drive, removable, CD-ROM, and archive groups.
//! - Well-known filenames and the removable device-type codes.
//!
//! Loading never fails on an unset variable; every value has a default.
//! Malformed values are surfaced as a [`SettingsError`] at startup instead of
//! leaking into downstream size comparisons.

mod error;
mod logging;
pub mod settings;

pub use error::{Result, SettingsError};
pub use logging::init_logging;
pub use settings::layout::{
    DEFAULT_CONFIG, DRIVE_PROPERTIES_FILENAME, PROPERTIES_SUFFIX, drive_properties_path,
    is_properties_file,
};
pub use settings::media::{
    ARCHIVE_FILE_SUFFIXES, CDROM_FILE_SUFFIXES, HARDDRIVE_FILE_SUFFIXES, MediaCategory,
    REMOVABLE_DEVICE_TYPES, REMOVABLE_FILE_SUFFIXES, is_removable_device_type, is_valid_suffix,
    valid_suffixes,
};
pub use settings::{
    DEFAULT_BASE_DIR, DEFAULT_MAX_FILE_SIZE, ENV_BASE_DIR, ENV_MAX_FILE_SIZE, Settings,
    init_settings, settings, try_settings,
};
