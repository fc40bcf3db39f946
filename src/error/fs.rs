//! File system errors raised while resolving the install root and copying

use std::path::Path;

use super::RemapError;

/// Creates an install root not found error
pub fn root_not_found(path: &Path) -> RemapError {
    RemapError::RootNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a source missing error
pub fn source_missing(path: &Path) -> RemapError {
    RemapError::SourceMissing {
        path: path.display().to_string(),
    }
}

/// Creates a copy failed error from an IO error at `path`
pub fn copy_failed(path: &Path, err: impl std::fmt::Display) -> RemapError {
    RemapError::CopyFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an overlap error for a destination that resolves into its source, or the reverse
pub fn paths_overlap(source: &Path, destination: &Path) -> RemapError {
    RemapError::PathsOverlap {
        source_path: source.display().to_string(),
        destination: destination.display().to_string(),
    }
}

/// Wraps an entry-level error with the mapping pair that produced it
pub fn entry_failed(
    index: usize,
    from: impl Into<String>,
    to: impl Into<String>,
    cause: RemapError,
) -> RemapError {
    RemapError::EntryFailed {
        index,
        from: from.into(),
        to: to.into(),
        cause: Box::new(cause),
    }
}

/// Creates the summary error for a check that found problems
pub fn check_failed(failed: usize, total: usize) -> RemapError {
    RemapError::CheckFailed { failed, total }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> RemapError {
    RemapError::IoError {
        message: message.into(),
    }
}
