//! Connection settings and their persisted store.
//!
//! A single settings record drives the whole client: endpoint base URL, API
//! key, demo-mode flag, and whether to remember the record across restarts.
//! The persisted copy is one JSON file at a well-known path; absence of the
//! file means defaults.
//!
//! # Environment Variables
//!
//! - `SOMAHAR_SETTINGS_PATH` - Overrides the settings file location
//!   (default: `~/.somahar/settings.json`)

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// The shipped default endpoint; never a real, usable server.
///
/// Any base URL containing this host is treated as unconfigured and rejected
/// before a network attempt is made.
pub const PLACEHOLDER_HOST: &str = "your-wordpress-site.com";

/// Default base URL shown to new users as a template.
pub const DEFAULT_BASE_URL: &str = "https://your-wordpress-site.com/wp-json/fbbot/v1";

/// Environment variable overriding the settings file location.
const SETTINGS_PATH_VAR: &str = "SOMAHAR_SETTINGS_PATH";

/// Errors from the settings store.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Home directory could not be determined for the default path.
    #[error("Could not determine home directory for settings storage")]
    NoHomeDir,

    /// Reading or writing the settings file failed.
    #[error("Settings file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings record could not be serialized.
    #[error("Settings serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Connection configuration for the remote API.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct Settings {
    /// Endpoint base URL (e.g. `https://my-site.com/wp-json/fbbot/v1`).
    pub base_url: String,
    /// Opaque credential sent via the `X-FBBOT-API-KEY` header.
    pub api_key: SecretString,
    /// When set, every call is answered by the mock responder.
    pub use_mock: bool,
    /// Persist this record across restarts.
    pub remember: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: SecretString::from(String::new()),
            use_mock: false,
            remember: true,
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("use_mock", &self.use_mock)
            .field("remember", &self.remember)
            .finish()
    }
}

impl Settings {
    /// True when the base URL is empty or still the shipped placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.base_url.is_empty() || self.base_url.contains(PLACEHOLDER_HOST)
    }

    /// True when a non-empty API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    /// Whether this record describes a usable session: mock mode, or a
    /// real URL plus a key.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.use_mock || (self.has_api_key() && !self.is_placeholder())
    }
}

/// On-disk mirror of [`Settings`].
///
/// The key is stored as a plain string in this private file; in memory it is
/// always wrapped in [`SecretString`].
#[derive(Serialize, Deserialize)]
struct StoredSettings {
    base_url: String,
    api_key: String,
    use_mock: bool,
    remember: bool,
}

impl From<&Settings> for StoredSettings {
    fn from(settings: &Settings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.expose_secret().to_string(),
            use_mock: settings.use_mock,
            remember: settings.remember,
        }
    }
}

impl From<StoredSettings> for Settings {
    fn from(stored: StoredSettings) -> Self {
        Self {
            base_url: stored.base_url,
            api_key: SecretString::from(stored.api_key),
            use_mock: stored.use_mock,
            remember: stored.remember,
        }
    }
}

/// Durable storage for the single settings record.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store backed by an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the well-known location:
    /// `$SOMAHAR_SETTINGS_PATH` if set, else `~/.somahar/settings.json`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoHomeDir`] if no home directory is available
    /// and the override variable is unset.
    pub fn at_default_path() -> Result<Self, SettingsError> {
        if let Ok(path) = std::env::var(SETTINGS_PATH_VAR) {
            return Ok(Self::new(path));
        }
        let home = dirs::home_dir().ok_or(SettingsError::NoHomeDir)?;
        Ok(Self::new(home.join(".somahar").join("settings.json")))
    }

    /// The file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted record.
    ///
    /// A missing file means defaults. A corrupt file also falls back to
    /// defaults (logged at warn) rather than failing startup.
    #[must_use]
    pub fn load(&self) -> Settings {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No persisted settings, using defaults");
                return Settings::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read settings, using defaults");
                return Settings::default();
            }
        };

        match serde_json::from_str::<StoredSettings>(&contents) {
            Ok(stored) => stored.into(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt settings file, using defaults");
                Settings::default()
            }
        }
    }

    /// Persist the record, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&StoredSettings::from(settings))?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "Settings persisted");
        Ok(())
    }

    /// Remove the persisted record. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] on any failure other than the file not
    /// existing.
    pub fn erase(&self) -> Result<(), SettingsError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
