//! Error types for reconciliation runs

use std::fmt;
use std::path::Path;

/// Errors that can occur while loading inputs or building a scan pattern
#[derive(Debug, Clone)]
pub enum ReconError {
    /// IO error when reading an input file
    Io { path: String, message: String },
    /// Marker character that cannot delimit a code
    InvalidMarker(char),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconError::Io { path, message } => {
                write!(f, "IO error reading {}: {}", path, message)
            }
            ReconError::InvalidMarker(marker) => write!(
                f,
                "invalid marker {:?}: must not be alphanumeric or whitespace",
                marker
            ),
        }
    }
}

impl std::error::Error for ReconError {}

impl ReconError {
    pub(crate) fn io(path: &Path, err: &std::io::Error) -> Self {
        ReconError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
