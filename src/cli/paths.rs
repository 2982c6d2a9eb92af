//! Path resolution utilities for CLI commands

use std::env;
use std::path::PathBuf;

/// Resolve the directory holding the data files.
///
/// If a data path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_data_dir(data: Option<PathBuf>) -> PathBuf {
    data.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
