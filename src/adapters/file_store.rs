// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-loaded backing store.
//!
//! This module provides a backing store whose entries are read from a
//! configuration file. Writes only change the in-memory entries; the file is
//! never written.

use crate::adapters::MemoryStore;
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::{BackingStore, ConfigParser};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Maximum allowed size for configuration files (10MB)
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "file";

/// Returns the parsers compiled into this build.
fn builtin_parsers() -> Vec<Arc<dyn ConfigParser>> {
    #[allow(unused_mut)]
    let mut parsers: Vec<Arc<dyn ConfigParser>> = Vec::new();
    #[cfg(feature = "yaml")]
    parsers.push(Arc::new(crate::adapters::YamlParser::new()));
    #[cfg(feature = "properties")]
    parsers.push(Arc::new(crate::adapters::PropertiesParser::new()));
    parsers
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

/// A backing store loaded from a configuration file.
///
/// The parser is chosen from the file extension (`.yaml`/`.yml` and
/// `.properties` with the default features) or given explicitly.
///
/// # Examples
///
/// ```rust,no_run
/// use typedcfg::adapters::FileStore;
/// use typedcfg::service::TypedConfigStore;
///
/// let store = TypedConfigStore::from_store(FileStore::from_file("/etc/graph/graph.properties").unwrap());
/// let backend: Option<String> = store.get_as("storage.backend").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Path to the configuration file
    file_path: PathBuf,
    /// Parser for the file's format
    parser: Arc<dyn ConfigParser>,
    /// Entries currently held
    values: MemoryStore,
}

impl FileStore {
    /// Loads a file, choosing the parser from its extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SourceError` if no compiled-in parser handles
    /// the extension or the file cannot be read, and `ConfigError::ParseError`
    /// if its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        let parser = builtin_parsers()
            .into_iter()
            .find(|p| p.supports_extension(extension))
            .ok_or_else(|| ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!(
                    "No parser available for file extension \"{}\" of {}",
                    extension,
                    display_name(path)
                ),
                source: None,
            })?;

        Self::with_parser(path, parser)
    }

    /// Loads a file with an explicit parser.
    pub fn with_parser<P: AsRef<Path>>(path: P, parser: Arc<dyn ConfigParser>) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        // Canonicalize so reloads read the same file
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!(
                    "Invalid or inaccessible path: {}",
                    display_name(&file_path)
                ),
                source: Some(Box::new(e)),
            })?;

        let values = Self::load(&canonical_path, parser.as_ref())?;
        tracing::debug!(
            "Loaded {} entries from {}",
            values.len(),
            canonical_path.display()
        );

        Ok(Self {
            file_path: canonical_path,
            parser,
            values: MemoryStore::from_values(values),
        })
    }

    /// Loads `config.yaml` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.yaml")
    }

    /// Loads `filename` from the OS-appropriate configuration directory.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Re-reads the file, replacing every entry including in-memory writes.
    pub fn reload(&self) -> Result<()> {
        let values = Self::load(&self.file_path, self.parser.as_ref())?;
        tracing::debug!(
            "Reloaded {} entries from {}",
            values.len(),
            self.file_path.display()
        );
        self.values.replace_all(values);
        Ok(())
    }

    fn load(path: &Path, parser: &dyn ConfigParser) -> Result<HashMap<String, ConfigValue>> {
        // Size cap is checked before reading
        let metadata = fs::metadata(path).map_err(|e| ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!("Failed to read file metadata: {}", display_name(path)),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!("Failed to read configuration file: {}", display_name(path)),
            source: Some(Box::new(e)),
        })?;

        parser.parse(&content)
    }
}

impl BackingStore for FileStore {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn contains_key(&self, key: &str) -> Result<bool> {
        self.values.contains_key(key)
    }

    fn get_property(&self, key: &str) -> Result<Option<ConfigValue>> {
        self.values.get_property(key)
    }

    fn get_keys(&self) -> Result<Box<dyn Iterator<Item = ConfigKey> + '_>> {
        self.values.get_keys()
    }

    fn set_property(&self, key: &str, value: ConfigValue) {
        self.values.set_property(key, value)
    }

    fn clear_property(&self, key: &str) {
        self.values.clear_property(key)
    }

    fn duplicate(&self) -> Result<Box<dyn BackingStore>> {
        Ok(Box::new(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn temp_with_suffix(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[cfg(feature = "properties")]
    #[test]
    fn test_from_properties_file() {
        let file = temp_with_suffix(".properties", "storage.backend=inmemory\n");
        let store = FileStore::from_file(file.path()).unwrap();

        assert_eq!(store.name(), "file");
        assert_eq!(
            store.get_property("storage.backend").unwrap(),
            Some(ConfigValue::from("inmemory"))
        );
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_yaml_file() {
        let file = temp_with_suffix(".yml", "storage:\n  port: 9160\n");
        let store = FileStore::from_file(file.path()).unwrap();
        assert_eq!(
            store.get_property("storage.port").unwrap(),
            Some(ConfigValue::from(9160i64))
        );
    }

    #[test]
    fn test_unknown_extension() {
        let file = temp_with_suffix(".ini", "[section]\n");
        let err = FileStore::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::SourceError { .. }));
        assert!(err.to_string().contains("ini"));
    }

    #[test]
    fn test_nonexistent_file() {
        assert!(FileStore::from_file("/nonexistent/path/to/config.yaml").is_err());
    }

    #[cfg(feature = "properties")]
    #[test]
    fn test_reload_replaces_entries() {
        let file = temp_with_suffix(".properties", "key=initial\n");
        let store = FileStore::from_file(file.path()).unwrap();
        store.set_property("written", ConfigValue::from("x"));

        fs::write(file.path(), "key=updated\n").unwrap();
        store.reload().unwrap();

        assert_eq!(store.get_property("key").unwrap(), Some(ConfigValue::from("updated")));
        assert!(!store.contains_key("written").unwrap());
    }

    #[cfg(feature = "properties")]
    #[test]
    fn test_duplicate_keeps_path_and_is_independent() {
        let file = temp_with_suffix(".properties", "key=value\n");
        let store = FileStore::from_file(file.path()).unwrap();
        let copy = store.duplicate().unwrap();

        store.set_property("key", ConfigValue::from("changed"));
        assert_eq!(copy.get_property("key").unwrap(), Some(ConfigValue::from("value")));
        assert_eq!(copy.name(), "file");
    }

    #[cfg(feature = "properties")]
    #[test]
    fn test_file_path_is_canonical() {
        let file = temp_with_suffix(".properties", "k=v\n");
        let store = FileStore::from_file(file.path()).unwrap();
        assert_eq!(store.file_path(), file.path().canonicalize().unwrap());
    }
}
