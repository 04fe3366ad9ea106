//! Reducer configuration and its JSON persistence.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Configuration for a [`Reducer`](crate::Reducer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReducerConfig {
    /// Text placed between adjacent operand words (default: a single space).
    /// Strike also tidies this text around whatever it removes.
    pub separator: String,

    /// Enable debug tracing
    pub debug: bool,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            debug: false,
        }
    }
}

impl ReducerConfig {
    /// Reject configurations the reducer cannot use sensibly.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            bail!("separator must not be empty");
        }
        Ok(())
    }

    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: ReducerConfig =
            serde_json::from_slice(&data).context("Failed to deserialize config")?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration as pretty JSON, replacing the file atomically.
    ///
    /// Writes a temporary file, syncs it, renames it over `path`, then syncs
    /// the parent directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self).context("Failed to serialize config")?;

        let tmp_path = path.with_extension("tmp");
        let mut file = File::create(&tmp_path)
            .with_context(|| format!("Failed to create temp file {}", tmp_path.display()))?;
        file.write_all(&json).context("Failed to write config")?;
        file.sync_all().context("Failed to sync config")?;
        drop(file);

        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to move config into place at {}", path.display()))?;

        // A bare file name has an empty parent; that means the working directory.
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let dir = OpenOptions::new()
            .read(true)
            .open(parent)
            .with_context(|| format!("Failed to open directory {}", parent.display()))?;
        dir.sync_all().context("Failed to sync directory")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wordfold.json");

        let config = ReducerConfig {
            separator: "-".to_string(),
            debug: true,
        };
        config.save(&path).unwrap();

        let loaded = ReducerConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!temp.path().join("wordfold.tmp").exists());
    }

    #[test]
    fn test_save_overwrites_existing_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wordfold.json");

        ReducerConfig::default().save(&path).unwrap();
        let updated = ReducerConfig {
            separator: ", ".to_string(),
            debug: false,
        };
        updated.save(&path).unwrap();

        assert_eq!(ReducerConfig::load(&path).unwrap(), updated);
        let entries = fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent").join("wordfold.json");
        assert!(ReducerConfig::default().save(&path).is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("partial.json");
        fs::write(&path, br#"{ "debug": true }"#).unwrap();

        let loaded = ReducerConfig::load(&path).unwrap();
        assert_eq!(loaded.separator, " ");
        assert!(loaded.debug);
    }

    #[test]
    fn test_empty_separator_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, br#"{ "separator": "" }"#).unwrap();

        assert!(ReducerConfig::load(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(ReducerConfig::load(&temp.path().join("absent.json")).is_err());
    }
}
