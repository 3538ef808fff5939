//! Atomic TOML file storage.
//!
//! A thin typed layer over a single TOML file: reads tolerate a missing or
//! empty file, writes go through a temp file plus rename so a crashed write
//! never leaves a half-written config behind.

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use sigesi_core::{Result, SigesiError};

/// A handle to a typed TOML file with atomic writes.
pub struct TomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> TomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new handle for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    /// Returns the underlying path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// Returns `Ok(None)` when the file does not exist or is empty.
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let data = toml::from_str(&content)
            .map_err(|e| SigesiError::serialization("TOML", e.to_string()))?;
        Ok(Some(data))
    }

    /// Serializes and saves data atomically (temp file + rename).
    pub fn save(&self, data: &T) -> Result<()> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| SigesiError::io("storage path has no parent directory"))?;
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(data)
            .map_err(|e| SigesiError::serialization("TOML", e.to_string()))?;

        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| SigesiError::io("storage path has no file name"))?;
        let tmp_path = parent.join(format!(".{}.tmp", file_name.to_string_lossy()));

        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Removes the file if it exists.
    pub fn remove(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = TomlFile::<TestConfig>::new(temp_dir.path().join("test.toml"));

        let config = TestConfig {
            name: "test".to_string(),
            count: 42,
        };
        file.save(&config).unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = TomlFile::<TestConfig>::new(temp_dir.path().join("missing.toml"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.toml");
        let file = TomlFile::<TestConfig>::new(path.clone());

        file.save(&TestConfig {
            name: "x".to_string(),
            count: 1,
        })
        .unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".test.toml.tmp").exists());
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.toml");
        let file = TomlFile::<TestConfig>::new(path.clone());

        file.save(&TestConfig {
            name: "x".to_string(),
            count: 1,
        })
        .unwrap();
        file.remove().unwrap();
        assert!(!path.exists());

        // Removing a missing file is not an error.
        file.remove().unwrap();
    }
}
