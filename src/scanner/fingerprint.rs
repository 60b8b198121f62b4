//! Perceptual fingerprinting of image files.
//!
//! Wraps the `image_hasher` crate behind the small surface the core needs:
//! fingerprint a file, measure the distance between two fingerprints. The
//! hasher produces DCT-preprocessed 64-bit median hashes, which stay stable
//! under resizing and recompression.

use image_hasher::{HashAlg, HasherConfig, ImageHash};
use std::path::Path;
use thiserror::Error;

use crate::similarity::{DistanceError, FingerprintMetric};

/// Fingerprint width in bits. Also the maximum Hamming distance two
/// fingerprints can be apart.
pub const FINGERPRINT_BITS: u32 = 64;

/// Errors that can occur while fingerprinting a file.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// Failed to open or decode the image.
    #[error("failed to load image {0}: {1}")]
    Load(String, #[source] image::ImageError),
}

/// Computes perceptual fingerprints for image files.
pub struct PerceptualHasher {
    hasher: image_hasher::Hasher,
}

impl PerceptualHasher {
    /// Create a hasher producing DCT-preprocessed 64-bit median hashes.
    #[must_use]
    pub fn new() -> Self {
        let hasher = HasherConfig::new()
            .hash_alg(HashAlg::Median)
            .preproc_dct()
            .to_hasher();
        Self { hasher }
    }

    /// Decode the image at `path` and compute its fingerprint.
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError::Load`] if the file cannot be opened or
    /// decoded.
    pub fn fingerprint<P: AsRef<Path>>(&self, path: P) -> Result<ImageHash, FingerprintError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| FingerprintError::Load(path.display().to_string(), e))?;

        Ok(self.hasher.hash_image(&img))
    }

    /// The metric matching this hasher's fingerprints.
    #[must_use]
    pub fn metric(&self) -> HammingMetric {
        HammingMetric::new(FINGERPRINT_BITS)
    }
}

impl Default for PerceptualHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hamming distance between fingerprints of a fixed bit width.
#[derive(Debug, Clone, Copy)]
pub struct HammingMetric {
    max_distance: u32,
}

impl HammingMetric {
    /// Create a metric for fingerprints of `bits` bits.
    #[must_use]
    pub fn new(bits: u32) -> Self {
        Self { max_distance: bits }
    }
}

impl FingerprintMetric<ImageHash> for HammingMetric {
    fn distance(&self, a: &ImageHash, b: &ImageHash) -> Result<u32, DistanceError> {
        // ImageHash::dist assumes equal widths; hashes from a differently
        // configured hasher cannot be compared.
        if a.as_bytes().len() != b.as_bytes().len() {
            return Err(DistanceError::IncompatibleFingerprints);
        }
        Ok(a.dist(b))
    }

    fn max_distance(&self) -> u32 {
        self.max_distance
    }
}
