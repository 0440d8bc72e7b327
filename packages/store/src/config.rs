//! # State configuration — `state.toml`
//!
//! Optional TOML file controlling where and under which keys the client state
//! is persisted. A missing or empty file is equivalent to the defaults.
//!
//! ```toml
//! [keys]
//! session = "user"        # key of the cached session record
//! language = "language"   # key of the language preference
//!
//! [language]
//! default = "km"          # used when nothing valid is stored
//!
//! [storage]
//! dir = "/var/lib/directory"   # native only, defaults to <data_dir>/directory-state
//! ```

use std::path::{Path, PathBuf};

use api::Language;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_APP_DIR: &str = "directory-state";

/// Top-level configuration stored in `state.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(default)]
    pub keys: StorageKeys,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage keys of the two records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageKeys {
    #[serde(default = "default_session_key")]
    pub session: String,
    #[serde(default = "default_language_key")]
    pub language: String,
}

fn default_session_key() -> String {
    "user".to_string()
}

fn default_language_key() -> String {
    "language".to_string()
}

impl StorageKeys {
    /// The two records must live under different keys.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session == self.language {
            return Err(ConfigError::DuplicateKey(self.session.clone()));
        }
        Ok(())
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            session: default_session_key(),
            language: default_language_key(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default)]
    pub default: Language,
}

/// Native storage location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl StorageConfig {
    /// The configured directory, else `<data_dir>/directory-state`.
    pub fn resolve_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.dir {
            return Some(dir.clone());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            dirs::data_dir().map(|base| base.join(DEFAULT_APP_DIR))
        }
        #[cfg(target_arch = "wasm32")]
        {
            None
        }
    }
}

impl StateConfig {
    /// Builder method to change the default language.
    pub fn with_default_language(mut self, lang: Language) -> Self {
        self.language.default = lang;
        self
    }

    /// Builder method to set the native storage directory.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.dir = Some(dir.into());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "state.toml"
    }

    /// Parse from TOML string and check the storage keys.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.keys.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("{} not found, using default state config", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
