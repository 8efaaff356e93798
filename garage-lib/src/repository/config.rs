use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    fs::{config_dir, data_dir},
};

const FILE_NAME: &str = "core.toml";
const STORE_FILE_NAME: &str = "vehicles.json";

/// The backend's core configuration, serialized to TOML.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Location of the vehicle store. Defaults to a file in the Garage data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    store_path: Option<PathBuf>,
}

impl CoreConfig {
    /// Load the configuration from the Garage configuration directory, writing the defaults
    /// if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir()?.join(FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| Error::MalformedConfig {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        fs::write(path, contents).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve where the vehicle store lives.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join(STORE_FILE_NAME)),
        }
    }

    pub fn set_store_path(&mut self, path: impl Into<PathBuf>) {
        self.store_path = Some(path.into());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg, CoreConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_store_path_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let mut cfg = CoreConfig::default();
        cfg.set_store_path("/srv/garage/fleet.json");
        cfg.save_to(&path).unwrap();

        let loaded = CoreConfig::load_from(&path).unwrap();

        assert_eq!(
            loaded.store_path().unwrap(),
            PathBuf::from("/srv/garage/fleet.json")
        );
    }

    #[test]
    fn test_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "store_path = [").unwrap();

        assert!(matches!(
            CoreConfig::load_from(&path),
            Err(Error::MalformedConfig { .. })
        ));
    }
}
