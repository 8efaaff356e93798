use std::{
    fs,
    path::{Path, PathBuf},
};

use garage_lib::{Error, fs::config_dir};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::theme::Theme;

mod theme;

const FILE_NAME: &str = "gui.toml";

/// The frontend's configuration, serialized to TOML.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GuiConfig {
    #[serde(default)]
    pub theme: Theme,
}

impl GuiConfig {
    /// Load the configuration, falling back to the defaults if it is missing or unreadable.
    pub fn load() -> Self {
        let path = match path() {
            Ok(path) => path,
            Err(e) => {
                warn!("Using default GUI configuration: {e}");
                return Self::default();
            }
        };

        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                    warn!(
                        "Using default GUI configuration, {} is malformed: {e}",
                        path.display()
                    );
                    Self::default()
                }),
                Err(e) => {
                    warn!(
                        "Using default GUI configuration, failed to read {}: {e}",
                        path.display()
                    );
                    Self::default()
                }
            }
        } else {
            let cfg = Self::default();
            if let Err(e) = cfg.save_to(path) {
                warn!("Failed to write default GUI configuration: {e}");
            }
            cfg
        }
    }

    pub fn save(&self) -> garage_lib::Result<()> {
        self.save_to(&path()?)
    }

    fn save_to(&self, path: &Path) -> garage_lib::Result<()> {
        let contents = toml::to_string_pretty(self)?;

        fs::write(path, contents).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

fn path() -> garage_lib::Result<PathBuf> {
    Ok(config_dir()?.join(FILE_NAME))
}
