//! Ingestion of exported simulation results.
//!
//! ## Reader
//! Walks one folder per incidence direction, takes the frequency from each
//! file name and parses `theta phi rcs` rows into [`Sample`]s.
//!
//! ## Summary
//! - `DatasetSummary`: distinct frequency/elevation/azimuth counts
//!
//! [`Sample`]: crate::engine::Sample

mod reader;
mod summary;

pub use reader::{
    frequency_from_file_name, incidence_for_direction, list_directory, parse_samples, DataReader,
    DirectoryLister, ParsedFile,
};
pub use summary::DatasetSummary;

use std::path::PathBuf;

use crate::engine::EngineError;

/// Errors that can occur while reading simulation exports.
#[derive(Debug)]
pub enum DataError {
    /// The data directory does not exist.
    DirectoryNotFound(PathBuf),
    /// A file or folder could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A data file name carries no frequency.
    InvalidFileName(String),
    /// Nothing could be read from the data directory.
    NoSamples(PathBuf),
    /// The samples read do not form a valid collection.
    Engine(EngineError),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::DirectoryNotFound(path) => {
                write!(f, "Data directory not found: {}", path.display())
            }
            DataError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            DataError::InvalidFileName(name) => {
                write!(f, "No frequency in file name: {}", name)
            }
            DataError::NoSamples(path) => write!(f, "No samples found in {}", path.display()),
            DataError::Engine(e) => write!(f, "Invalid samples: {}", e),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io { source, .. } => Some(source),
            DataError::Engine(e) => Some(e),
            _ => None,
        }
    }
}
