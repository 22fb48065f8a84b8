//! Loading and saving the registry as a JSON file.
//!
//! The file holds a single JSON array with one object per employee. It is read
//! once at start-up and rewritten wholesale on save.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{
    domain::{Employee, Registry, ValidationError},
    storage::record::EmployeeRecord,
};

/// Errors that can occur when loading the registry.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data file does not exist.
    #[error("data file not found")]
    NotFound,

    /// The file is not a JSON array of employee objects.
    #[error("failed to decode data file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record decoded, but one of its fields is invalid.
    #[error("invalid employee record at index {index}: {source}")]
    InvalidRecord {
        /// Position of the record in the file.
        index: usize,
        /// The field that failed validation.
        source: ValidationError,
    },

    /// Any other I/O failure.
    #[error("failed to read data file: {0}")]
    Io(#[from] io::Error),
}

/// Errors that can occur when saving the registry.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The registry could not be encoded.
    #[error("failed to encode employees: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The file could not be written.
    #[error("failed to write data file: {0}")]
    Io(#[from] io::Error),
}

/// Loads the registry from a JSON file.
///
/// # Errors
///
/// Returns a [`LoadError`] describing why the file could not be loaded. No
/// partial registry is returned.
pub fn load(path: &Path) -> Result<Registry, LoadError> {
    let file = File::open(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound,
        _ => LoadError::Io(io_error),
    })?;

    let records: Vec<EmployeeRecord> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| {
            if e.is_io() {
                LoadError::Io(e.into())
            } else {
                LoadError::Malformed(e)
            }
        })?;

    let registry = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Employee::try_from(record).map_err(|source| LoadError::InvalidRecord { index, source })
        })
        .collect::<Result<Registry, _>>()?;

    tracing::debug!(count = registry.len(), "loaded employees from {}", path.display());
    Ok(registry)
}

/// Loads the registry from a JSON file, starting empty if that fails.
///
/// Load failures are never fatal: each kind of failure is logged with its own
/// message and an empty registry is returned in its place.
pub fn load_or_default(path: &Path) -> Registry {
    match load(path) {
        Ok(registry) => registry,
        Err(LoadError::NotFound) => {
            tracing::warn!(
                "Data file {} not found, starting with no employees",
                path.display()
            );
            Registry::default()
        }
        Err(error @ (LoadError::Malformed(_) | LoadError::InvalidRecord { .. })) => {
            tracing::warn!(
                "Could not decode {} ({error}), starting with no employees",
                path.display()
            );
            Registry::default()
        }
        Err(LoadError::Io(error)) => {
            tracing::warn!(
                "Unexpected error reading {} ({error}), starting with no employees",
                path.display()
            );
            Registry::default()
        }
    }
}

/// Saves the registry to a JSON file, replacing its contents.
///
/// Output is pretty-printed with four-space indentation.
///
/// # Errors
///
/// Returns a [`SaveError`] if the file cannot be created or written.
pub fn save(path: &Path, registry: &Registry) -> Result<(), SaveError> {
    let records: Vec<EmployeeRecord> = registry.iter().map(EmployeeRecord::from).collect();

    let mut writer = BufWriter::new(File::create(path)?);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::debug!(count = records.len(), "saved employees to {}", path.display());
    Ok(())
}
