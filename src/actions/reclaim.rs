//! Disk-space reclamation for similar-image groups.
//!
//! # Overview
//!
//! Keeps the group member closest to the anchor and permanently removes
//! the rest, tallying the bytes freed.
//!
//! # Safety
//!
//! Deletion is irreversible and not transactional: files removed before a
//! failure stay removed. Callers gate reclamation behind an explicit
//! opt-in flag.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scanner::FingerprintedImage;
use crate::similarity::{FingerprintMetric, SimilarGroup};

/// Error type for reclamation.
#[derive(Debug, Error)]
pub enum ReclaimError {
    /// File was not found (may have been deleted or moved since the scan).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when statting or removing a file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReclaimError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// Delete every member of `group` except the one closest to the anchor.
///
/// Members are stably re-sorted by ascending distance to the anchor, ties
/// keeping their relative input order. The anchor is at distance 0 of
/// itself and therefore always sorts first and survives; every member
/// after it is statted for its size, removed, and its size added to the
/// returned total. A failed distance computation is logged and orders that
/// member last.
///
/// Groups with fewer than two members are a no-op returning 0.
///
/// # Errors
///
/// The first stat or remove failure aborts the group and returns
/// [`ReclaimError`]; the partial byte count is discarded with it. Files
/// removed before the failure stay removed.
pub fn reclaim_group<F, M>(group: &SimilarGroup<'_, F>, metric: &M) -> Result<u64, ReclaimError>
where
    M: FingerprintMetric<F>,
{
    if group.len() < 2 {
        return Ok(0);
    }

    let anchor = group.anchor();

    let mut ranked: Vec<(u32, &FingerprintedImage<F>)> = group
        .members()
        .iter()
        .map(|&member| {
            let distance = metric
                .distance(&anchor.fingerprint, &member.fingerprint)
                .unwrap_or_else(|err| {
                    log::warn!("Failed to rank {}: {err}", member.path.display());
                    u32::MAX
                });
            (distance, member)
        })
        .collect();
    // Stable: the anchor keeps first place among distance-0 members
    ranked.sort_by_key(|(distance, _)| *distance);

    log::debug!(
        "Keeping {} out of {} member(s)",
        ranked[0].1.path.display(),
        ranked.len()
    );

    let mut bytes_freed = 0u64;
    for (_, member) in &ranked[1..] {
        let metadata =
            fs::metadata(&member.path).map_err(|e| ReclaimError::from_io(&member.path, e))?;
        fs::remove_file(&member.path).map_err(|e| ReclaimError::from_io(&member.path, e))?;

        log::info!(
            "Removed {} ({} bytes)",
            member.path.display(),
            metadata.len()
        );
        bytes_freed += metadata.len();
    }

    Ok(bytes_freed)
}
