//! Scanner module for directory traversal and image fingerprinting.
//!
//! This module provides functionality for:
//! - Deterministic directory walking and image discovery
//! - Perceptual fingerprinting of decoded images
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: directory traversal and image discovery
//! - [`fingerprint`]: perceptual hashing of image files
//!
//! The scan pass walks the tree in lexicographic order, fingerprints every
//! image it finds, and collects the results into a [`FingerprintStore`]
//! whose entry order is the discovery order. Grouping depends on that
//! order, so it must stay stable across runs.

pub mod fingerprint;
pub mod walker;

use std::path::{Path, PathBuf};

// Re-export main types
pub use fingerprint::{FingerprintError, HammingMetric, PerceptualHasher, FINGERPRINT_BITS};
pub use walker::Walker;

/// File extensions treated as images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// A scanned image: its location and perceptual fingerprint.
///
/// Created once during the scan phase and never mutated afterwards. The
/// fingerprint is opaque; it is only meaningful through a
/// [`FingerprintMetric`](crate::similarity::FingerprintMetric). Deleting
/// the file on disk does not invalidate this in-memory record.
#[derive(Debug, Clone)]
pub struct FingerprintedImage<F> {
    /// Filesystem location at scan time
    pub path: PathBuf,
    /// Fingerprint produced by the hashing collaborator
    pub fingerprint: F,
}

impl<F> FingerprintedImage<F> {
    /// Create a new fingerprinted image.
    #[must_use]
    pub fn new(path: PathBuf, fingerprint: F) -> Self {
        Self { path, fingerprint }
    }
}

/// Fingerprinted images in discovery order.
///
/// Built once by [`scan_directory`], then handed by shared reference to the
/// grouping and reclamation phases. Reclamation mutates the filesystem
/// only, never the store; callers must not assume deleted files still have
/// useful entries for a subsequent pass.
#[derive(Debug)]
pub struct FingerprintStore<F> {
    entries: Vec<FingerprintedImage<F>>,
}

impl<F> FingerprintStore<F> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an image; entry order is insertion order.
    pub fn push(&mut self, path: PathBuf, fingerprint: F) {
        self.entries.push(FingerprintedImage::new(path, fingerprint));
    }

    /// All entries, in discovery order.
    #[must_use]
    pub fn entries(&self) -> &[FingerprintedImage<F>] {
        &self.entries
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F> Default for FingerprintStore<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during the scan pass.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// The specified path was not found.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Permission was denied while walking the tree.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred during traversal.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An image failed to decode or fingerprint.
    ///
    /// A single failure aborts the whole scan; no partial store is used.
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),
}

/// Walk `root` and fingerprint every image found, in discovery order.
///
/// Traversal is lexicographic by file name, so the entry order of the
/// returned store, and therefore the grouping outcome, is reproducible
/// across platforms. The first traversal or fingerprint error aborts the
/// scan.
///
/// # Errors
///
/// Returns [`ScanError`] if the root is missing or not a directory, if any
/// directory entry cannot be read, or if any image fails to decode or hash.
pub fn scan_directory(
    root: &Path,
    hasher: &PerceptualHasher,
) -> Result<FingerprintStore<image_hasher::ImageHash>, ScanError> {
    let walker = Walker::new(root);
    let mut store = FingerprintStore::new();

    for path in walker.image_paths()? {
        let fingerprint = hasher.fingerprint(&path)?;
        log::debug!("Fingerprinted {}", path.display());
        store.push(path, fingerprint);
    }

    Ok(store)
}
