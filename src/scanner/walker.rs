//! Directory walker for image discovery.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and collecting the image files to fingerprint. Children are visited
//! in file-name order, so discovery order, and therefore grouping order,
//! is deterministic across platforms instead of depending on readdir order.
//!
//! # Example
//!
//! ```no_run
//! use picdupe::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Pictures"));
//! for path in walker.image_paths().unwrap() {
//!     println!("{}", path.display());
//! }
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{ScanError, IMAGE_EXTENSIONS};

/// Recursive image discovery over a directory tree.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker rooted at `path`.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// Collect the paths of all image files under the root, in
    /// lexicographic traversal order.
    ///
    /// # Errors
    ///
    /// Fails if the root is missing or not a directory, or if any directory
    /// entry cannot be read. A traversal error aborts the walk; no partial
    /// result is returned.
    pub fn image_paths(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::NotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| self.map_walk_error(e))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.into_path();
            if is_image_path(&path) {
                log::trace!("Discovered {}", path.display());
                paths.push(path);
            }
        }

        Ok(paths)
    }

    /// Convert a walkdir error to a [`ScanError`].
    fn map_walk_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        match error.io_error().map(std::io::Error::kind) {
            Some(std::io::ErrorKind::PermissionDenied) => {
                log::warn!("Permission denied: {}", path.display());
                ScanError::PermissionDenied(path)
            }
            _ => {
                let source = error
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
                ScanError::Io { path, source }
            }
        }
    }
}

/// Check whether a path carries one of the accepted image extensions.
#[must_use]
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}
