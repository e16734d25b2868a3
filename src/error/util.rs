//! Utility functions for error handling
//!
//! File-system helpers that turn raw IO failures into errors carrying the
//! path and the reason the file was needed.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, SamplingError};

/// Make sure a directory exists and is a directory, creating it if missing
///
/// # Arguments
/// * `path` - The directory to check or create
/// * `purpose` - Why the directory is needed (for error context)
pub fn ensure_directory(path: &Path, purpose: &str) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(SamplingError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "{} is not a directory (needed for: {purpose})",
                    path.display()
                ),
            )));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check directory permissions".to_string()
            }
            _ => format!("Failed to create directory for: {purpose}"),
        };
        SamplingError::Io(io::Error::new(
            e.kind(),
            format!("{context}: {} ({e})", path.display()),
        ))
    })
}

/// Open a file for reading with a message naming the path and purpose
pub fn open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        return Err(SamplingError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {} (needed for: {purpose})", path.display()),
        )));
    }

    fs::File::open(path).map_err(|e| {
        SamplingError::Io(io::Error::new(
            e.kind(),
            format!("Failed to open {} for {purpose}: {e}", path.display()),
        ))
    })
}

/// Create (or truncate) a file for writing
pub fn create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| {
        SamplingError::Io(io::Error::new(
            e.kind(),
            format!("Failed to create {} for {purpose}: {e}", path.display()),
        ))
    })
}
