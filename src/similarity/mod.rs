//! Similarity grouping core.
//!
//! This module provides:
//! - The [`FingerprintMetric`] seam the core sees fingerprints through
//! - [`SimilarityThreshold`], the normalized acceptance threshold
//! - Greedy threshold clustering ([`group_similar`])
//!
//! The grouping and reclamation logic never inspects fingerprints directly,
//! so it can be exercised with plain integers in tests while production
//! uses 64-bit perceptual hashes.

pub mod grouper;
pub mod groups;

use thiserror::Error;

// Re-export main types
pub use grouper::group_similar;
pub use groups::SimilarGroup;

/// A failed pairwise fingerprint comparison.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistanceError {
    /// The two fingerprints cannot be compared (e.g. different widths).
    #[error("incompatible fingerprints")]
    IncompatibleFingerprints,
}

/// Distance measure between two fingerprints.
///
/// `distance` returns an integer dissimilarity in `[0, max_distance()]`;
/// 0 means identical, larger values mean less similar.
pub trait FingerprintMetric<F> {
    /// Distance between two fingerprints.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError`] if the fingerprints cannot be compared.
    fn distance(&self, a: &F, b: &F) -> Result<u32, DistanceError>;

    /// The maximum distance this metric can report.
    fn max_distance(&self) -> u32;
}

/// An out-of-range similarity percentage.
#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    /// The percentage fell outside `[0, 100]`.
    #[error("percentage must be between 0 and 100, got {0}")]
    OutOfRange(f64),
}

/// Required similarity between an anchor and a group member, in `[0, 1]`.
///
/// Derived from a user-supplied percentage. Two fingerprints at distance
/// `d` under a metric with maximum distance `m` are similar enough when
/// `1 - d/m >= threshold`, equality included: 1.0 accepts only identical
/// fingerprints, 0.0 accepts any pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityThreshold(f64);

impl SimilarityThreshold {
    /// Build a threshold from a percentage in `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::OutOfRange`] for values outside the range
    /// (NaN included).
    pub fn from_percentage(percentage: f64) -> Result<Self, ThresholdError> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(ThresholdError::OutOfRange(percentage));
        }
        Ok(Self(percentage / 100.0))
    }

    /// The threshold value in `[0, 1]`.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether a pair at `distance` under a metric with `max_distance`
    /// counts as similar.
    #[must_use]
    pub fn accepts(self, distance: u32, max_distance: u32) -> bool {
        let similarity = 1.0 - f64::from(distance) / f64::from(max_distance);
        similarity >= self.0
    }
}
