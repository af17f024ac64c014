//! JSON-backed configuration.
//!
//! Small key/value files live under `data/` (`config.json`, `colours.json`). They are
//! read through [`ConfigProvider`] so callers never depend on the storage format.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::paginator::DEFAULT_TIMEOUT;

/// Directory holding the JSON data files.
pub const DATA_DIR: &str = "data";

/// Errors that can occur while reading or writing a JSON store
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} does not contain a JSON object")]
    NotAnObject(PathBuf),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Read-only key lookup over some configuration source.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigProvider: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<Value>;
}

/// Named colour lookup on top of any [`ConfigProvider`].
pub trait ColourLookup {
    /// Fetch a colour by name, falling back to black.
    fn colour(&self, name: &str) -> u32;
}

impl<T: ConfigProvider + ?Sized> ColourLookup for T {
    fn colour(&self, name: &str) -> u32 {
        self.lookup(name)
            .and_then(|value| value.as_u64())
            .and_then(|value| u32::try_from(value).ok())
            .unwrap_or_else(|| {
                warn!("Colour '{}' not configured", name);
                0
            })
    }
}

/// Append `.json` to a file name that does not already end with it.
pub fn validate_name(filename: &str) -> String {
    if filename.ends_with(".json") {
        filename.to_string()
    } else {
        format!("{filename}.json")
    }
}

/// A single JSON object stored in a file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Store for `filename` inside `dir`. The `.json` extension is optional.
    pub fn new(dir: impl AsRef<Path>, filename: &str) -> Self {
        Self {
            path: dir.as_ref().join(validate_name(filename)),
        }
    }

    /// Store for `filename` inside [`DATA_DIR`].
    pub fn data(filename: &str) -> Self {
        Self::new(DATA_DIR, filename)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole file as a JSON object.
    pub fn read_file(&self) -> ConfigResult<Map<String, Value>> {
        let raw = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        match serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: self.path.clone(),
            source,
        })? {
            Value::Object(map) => Ok(map),
            _ => Err(ConfigError::NotAnObject(self.path.clone())),
        }
    }

    /// Replace the file content with `data`, pretty-printed with a 4-space indent.
    pub fn overwrite_file(&self, data: &Map<String, Value>) -> ConfigResult<()> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        serde::Serialize::serialize(data, &mut serializer).map_err(|source| ConfigError::Json {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, buffer).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Fetch the value stored under `key`.
    pub fn fetch_data(&self, key: &str) -> ConfigResult<Option<Value>> {
        Ok(self.read_file()?.get(key).cloned())
    }

    /// Merge `data` into the file. Keys in `data` replace existing ones.
    pub fn append_data(&self, data: Map<String, Value>) -> ConfigResult<()> {
        let mut file = self.read_file()?;
        file.extend(data);
        self.overwrite_file(&file)
    }
}

impl ConfigProvider for JsonStore {
    fn lookup(&self, key: &str) -> Option<Value> {
        match self.fetch_data(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

/// Bot settings read from `data/config.json`
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Prefix for text commands (the bot also answers to mentions).
    #[serde(default = "default_prefix")]
    pub init_prefix: String,

    /// Idle time before paginator buttons are removed, e.g. `"30s"`.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub paginator_timeout: Duration,

    /// Extra owner ids on top of the application owner.
    #[serde(default)]
    pub owners: Vec<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            init_prefix: default_prefix(),
            paginator_timeout: default_timeout(),
            owners: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from a store, using defaults for missing keys.
    pub fn load(store: &JsonStore) -> ConfigResult<Self> {
        let map = store.read_file()?;
        serde_json::from_value(Value::Object(map)).map_err(|source| ConfigError::Json {
            path: store.path().to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Creates a fresh scratch directory for one test.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "ghoul-assistant-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("Failed to create scratch dir");
        dir
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("config"), "config.json");
        assert_eq!(validate_name("colours.json"), "colours.json");
    }

    #[test]
    fn test_fetch_missing_key() {
        let dir = scratch_dir("fetch");
        fs::write(dir.join("colours.json"), r#"{"orange": 16753920}"#).unwrap();
        let store = JsonStore::new(&dir, "colours");

        assert_eq!(store.fetch_data("orange").unwrap(), Some(json!(16753920)));
        assert_eq!(store.fetch_data("purple").unwrap(), None);
    }

    /// Appending merges keys and overwrites existing ones.
    #[test]
    fn test_append_data_merges() {
        let dir = scratch_dir("append");
        fs::write(dir.join("config.json"), r#"{"a": 1, "b": 2}"#).unwrap();
        let store = JsonStore::new(&dir, "config.json");

        let mut update = Map::new();
        update.insert("b".to_string(), json!(3));
        update.insert("c".to_string(), json!("x"));
        store.append_data(update).unwrap();

        let map = store.read_file().unwrap();
        assert_eq!(Value::Object(map), json!({"a": 1, "b": 3, "c": "x"}));

        let written = fs::read_to_string(store.path()).unwrap();
        assert!(written.contains("\n    \"a\": 1"));
    }

    #[test]
    fn test_read_missing_file() {
        let store = JsonStore::new(scratch_dir("missing"), "nope");
        assert_matches!(store.read_file(), Err(ConfigError::Io { .. }));
    }

    #[test]
    fn test_read_non_object() {
        let dir = scratch_dir("array");
        fs::write(dir.join("list.json"), "[1, 2]").unwrap();
        let store = JsonStore::new(&dir, "list");

        assert_matches!(store.read_file(), Err(ConfigError::NotAnObject(_)));
    }

    #[test]
    fn test_settings_defaults_and_timeout() {
        let dir = scratch_dir("settings");
        fs::write(
            dir.join("config.json"),
            r#"{"init_prefix": "?", "paginator_timeout": "1m 40s"}"#,
        )
        .unwrap();

        let settings = Settings::load(&JsonStore::new(&dir, "config")).unwrap();

        assert_eq!(settings.init_prefix, "?");
        assert_eq!(settings.paginator_timeout, Duration::from_secs(100));
        assert!(settings.owners.is_empty());
    }

    #[test]
    fn test_colour_lookup_through_provider() {
        let mut provider = MockConfigProvider::new();
        provider
            .expect_lookup()
            .withf(|key| key == "orange")
            .returning(|_| Some(json!(0xff9900)));
        provider
            .expect_lookup()
            .withf(|key| key == "teal")
            .returning(|_| None);

        assert_eq!(provider.colour("orange"), 0xff9900);
        assert_eq!(provider.colour("teal"), 0);
    }
}
