use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::{
    Error, Result,
    fs::ensure_dir,
    repository::models::{LegacyVehicle, Vehicle},
};

const INDENT: &[u8] = b"    ";

/// The flat JSON file holding every [`Vehicle`].
///
/// Every call reads or writes the whole collection. There is no locking, so two processes
/// writing the same file will clobber each other (last writer wins).
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every vehicle in insertion order.
    ///
    /// A missing file is an empty store. Entries in an older shape are migrated and the
    /// upgraded collection is written back before returning.
    pub fn load(&self) -> Result<Vec<Vehicle>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(Error::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let entries: Vec<LegacyVehicle> =
            serde_json::from_str(&contents).map_err(|source| Error::MalformedStore {
                path: self.path.clone(),
                source,
            })?;

        let outdated = entries.iter().filter(|e| !e.is_current()).count();
        if outdated > 0 {
            debug!(
                "Migrating {outdated} vehicle record(s) in {}",
                self.path.display()
            );
        }

        let vehicles: Vec<Vehicle> = entries.into_iter().map(LegacyVehicle::migrate).collect();

        self.save(&vehicles)?;

        Ok(vehicles)
    }

    /// Overwrite the store with `vehicles`.
    pub fn save(&self, vehicles: &[Vehicle]) -> Result<()> {
        let mut contents = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut contents, PrettyFormatter::with_indent(INDENT));
        vehicles
            .serialize(&mut serializer)
            .map_err(Error::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent.to_path_buf())?;
        }

        fs::write(&self.path, contents).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })
    }
}
