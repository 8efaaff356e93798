//! Vehicle record management for Garage.
//!
//! The [`Repository`] owns the on-disk vehicle store and exposes the add, update and delete
//! operations. [`form::FormState`] holds pending user input for front-ends that edit records
//! through a form.

use std::{io, path::PathBuf};

use thiserror::Error;

pub mod form;
pub mod fs;
pub mod repository;

pub use repository::Repository;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed vehicle store {}: {source}", .path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize vehicles: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Malformed configuration {}: {source}", .path.display())]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize configuration: {0}")]
    SerializeConfig(#[from] toml::ser::Error),
    #[error("Unable to locate the {0} directory, $HOME must exist")]
    NoHomeDir(&'static str),
}
