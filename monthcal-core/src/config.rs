//! monthcal configuration at ~/.config/monthcal/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{CalError, CalResult};
use crate::storage::FileStorage;
use crate::store::STORAGE_KEY;

static DEFAULT_DATA_DIR: &str = "~/.monthcal";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct MonthcalConfig {
    /// Directory holding the persisted event store
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key the event map is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Where exports are written when no directory is given
    pub export_dir: Option<PathBuf>,
}

impl Default for MonthcalConfig {
    fn default() -> Self {
        MonthcalConfig {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            export_dir: None,
        }
    }
}

impl MonthcalConfig {
    pub fn config_path() -> CalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalError::Config("Could not determine config directory".into()))?
            .join("monthcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file gives the defaults.
    pub fn load() -> CalResult<Self> {
        Self::load_from(Self::config_path()?)
    }

    pub fn load_from(path: PathBuf) -> CalResult<Self> {
        let config: MonthcalConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .build()?
            .try_deserialize()?;

        if config.storage_key.trim().is_empty() {
            return Err(CalError::Config("storage_key must not be empty".into()));
        }

        Ok(config)
    }

    pub fn data_path(&self) -> PathBuf {
        expand(&self.data_dir)
    }

    /// The configured export directory, or the current directory.
    pub fn export_path(&self) -> PathBuf {
        self.export_dir
            .as_deref()
            .map(expand)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_path())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = MonthcalConfig::load_from(tmp.path().join("config.toml")).unwrap();

        assert_eq!(config.storage_key, "calendarEvents");
        assert_eq!(config.data_dir, PathBuf::from("~/.monthcal"));
        assert_eq!(config.export_path(), PathBuf::from("."));
    }

    #[test]
    fn test_reads_values_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/var/lib/monthcal\"\nstorage_key = \"work\"\nexport_dir = \"/tmp/exports\"\n",
        )
        .unwrap();

        let config = MonthcalConfig::load_from(path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/var/lib/monthcal"));
        assert_eq!(config.storage_key, "work");
        assert_eq!(config.export_path(), PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_rejects_empty_storage_key() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "storage_key = \"\"\n").unwrap();

        assert!(matches!(MonthcalConfig::load_from(path), Err(CalError::Config(_))));
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = MonthcalConfig::default();
        assert!(!config.data_path().to_string_lossy().starts_with('~'));
    }
}
