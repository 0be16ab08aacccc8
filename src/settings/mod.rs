//! Process-wide settings for the image store.
//!
//! Settings are built once at startup and never mutated afterwards; consumers
//! either receive a `Settings` value explicitly or read the shared instance
//! through [`settings()`]. Every environment lookup has a default, so loading
//! only fails on malformed values.

pub mod layout;
pub mod media;

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};

/// Environment variable overriding the image-store root.
pub const ENV_BASE_DIR: &str = "BASE_DIR";

/// Environment variable overriding the maximum accepted file size, in bytes.
pub const ENV_MAX_FILE_SIZE: &str = "MAX_FILE_SIZE";

/// Default image-store root when `BASE_DIR` is unset.
pub const DEFAULT_BASE_DIR: &str = "/home/pi/images/";

/// Default maximum accepted file size: 2 GiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 2 * 1024 * 1024 * 1024;

/// Immutable snapshot of the service configuration.
///
/// Constructed once via [`Settings::load`] and held for the process lifetime.
/// `base_dir` is not validated to exist; callers handle a missing or
/// unreadable directory when they first touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory for managed disk images.
    pub base_dir: PathBuf,
    /// Working directory captured at load time.
    pub home_dir: PathBuf,
    /// Upper bound on accepted file size, in bytes.
    pub max_file_size: u64,
    /// Path of the canonical drive-properties document.
    pub drive_properties_file: PathBuf,
}

impl Settings {
    /// Load settings from the process environment and working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined or if
    /// `MAX_FILE_SIZE` is set to something other than an integer byte count.
    /// An unset variable is never an error.
    pub fn load() -> Result<Self> {
        let home_dir = std::env::current_dir().map_err(SettingsError::HomeDir)?;
        Self::from_lookup(|key| std::env::var(key).ok(), home_dir)
    }

    /// Build settings from an environment lookup and an explicit home
    /// directory. Tests inject lookups here instead of mutating the real
    /// process environment.
    pub fn from_lookup<E>(env: E, home_dir: PathBuf) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        // The suffix groups are literal data, so an overlap is a programming
        // error; catch it before any classification happens.
        media::ensure_disjoint_categories()?;

        let base_dir = env(ENV_BASE_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR));

        let max_file_size = match env(ENV_MAX_FILE_SIZE) {
            Some(raw) => raw
                .parse()
                .map_err(|source| SettingsError::InvalidMaxFileSize { value: raw, source })?,
            None => DEFAULT_MAX_FILE_SIZE,
        };

        let drive_properties_file = layout::drive_properties_path(&home_dir);

        tracing::debug!(
            base_dir = %base_dir.display(),
            max_file_size,
            drive_properties_file = %drive_properties_file.display(),
            "Loaded settings"
        );

        Ok(Self {
            base_dir,
            home_dir,
            max_file_size,
            drive_properties_file,
        })
    }
}

// ============================================================================
// GLOBAL SHARED SETTINGS
// ============================================================================

/// Shared settings instance (lazy initialization).
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Get or initialize the shared settings.
///
/// Loaded lazily from the environment on first access and reused for all
/// subsequent calls. Use [`init_settings`] early in `main` to install a
/// custom snapshot instead.
///
/// # Panics
///
/// Panics if loading from the environment fails (malformed `MAX_FILE_SIZE`
/// or an unreadable working directory).
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| Settings::load().expect("Failed to load settings from environment"))
}

/// Try to get the shared settings if they have been initialized.
pub fn try_settings() -> Option<&'static Settings> {
    SETTINGS.get()
}

/// Install a custom settings snapshot as the shared instance.
///
/// Must be called before the first use of [`settings()`].
///
/// # Errors
///
/// Returns an error if the shared settings were already initialized.
pub fn init_settings(settings: Settings) -> Result<()> {
    SETTINGS
        .set(settings)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

// Compile-time assertion that Settings can be shared across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<Settings>;
};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let home = PathBuf::from("/srv/imagehub");
        let settings = Settings::from_lookup(no_env, home.clone()).unwrap();

        assert_eq!(settings.base_dir, PathBuf::from("/home/pi/images/"));
        assert_eq!(settings.home_dir, home);
        assert_eq!(settings.max_file_size, 2_147_483_648);
        assert_eq!(
            settings.drive_properties_file,
            home.join("drive_properties.json")
        );
    }

    #[test]
    fn base_dir_override_is_used_exactly() {
        let env = |key: &str| (key == ENV_BASE_DIR).then(|| "/mnt/images".to_string());
        let settings = Settings::from_lookup(env, PathBuf::from("/srv")).unwrap();

        assert_eq!(settings.base_dir, PathBuf::from("/mnt/images"));
    }

    #[test]
    fn max_file_size_override_is_parsed() {
        let env = |key: &str| (key == ENV_MAX_FILE_SIZE).then(|| "1048576".to_string());
        let settings = Settings::from_lookup(env, PathBuf::from("/srv")).unwrap();

        assert_eq!(settings.max_file_size, 1_048_576);
    }

    #[test]
    fn malformed_max_file_size_is_a_load_error() {
        let env = |key: &str| (key == ENV_MAX_FILE_SIZE).then(|| "2 gigabytes".to_string());
        let result = Settings::from_lookup(env, PathBuf::from("/srv"));

        assert!(matches!(
            result,
            Err(SettingsError::InvalidMaxFileSize { .. })
        ));
    }

    #[test]
    fn load_captures_the_working_directory() {
        let settings = Settings::load().unwrap();

        assert_eq!(settings.home_dir, std::env::current_dir().unwrap());
        assert_eq!(
            settings.drive_properties_file,
            settings.home_dir.join("drive_properties.json")
        );
    }

    #[test]
    fn settings_snapshot_round_trips_through_json() {
        let settings = Settings::from_lookup(no_env, PathBuf::from("/srv")).unwrap();

        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn drive_properties_path_is_usable_on_disk() {
        let home = tempdir().unwrap();
        let settings = Settings::from_lookup(no_env, home.path().to_path_buf()).unwrap();

        std::fs::write(&settings.drive_properties_file, "{}").unwrap();
        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&settings.drive_properties_file).unwrap())
                .unwrap();
        assert!(doc.as_object().unwrap().is_empty());
    }
}
