//! Greedy similarity clustering.
//!
//! Single-pass, order-dependent clustering: each unclaimed image in input
//! order seeds a group, and every later unclaimed image within the
//! threshold of that anchor joins it. The clustering is not transitive:
//! membership is always measured against the anchor, never between
//! members. The same input order always yields the same groups.

use crate::scanner::FingerprintedImage;

use super::{FingerprintMetric, SimilarGroup, SimilarityThreshold};

/// Partition `images` into groups of images similar to a shared anchor.
///
/// Images are considered in input order. An image claimed by an earlier
/// group is never revisited; an image that matches nothing is absent from
/// the output (singleton groups are discarded). A failed pairwise
/// comparison is logged and treated as non-similar; it never aborts the
/// pass.
///
/// O(n²) distance evaluations in the worst case, with no early-exit
/// structure. Acceptable at the scale of a local photo directory.
#[must_use]
pub fn group_similar<'a, F, M>(
    images: &'a [FingerprintedImage<F>],
    threshold: SimilarityThreshold,
    metric: &M,
) -> Vec<SimilarGroup<'a, F>>
where
    M: FingerprintMetric<F>,
{
    let mut groups = Vec::new();
    let mut claimed = vec![false; images.len()];

    for i in 0..images.len() {
        if claimed[i] {
            continue;
        }

        let anchor = &images[i];
        let mut group = SimilarGroup::new(anchor);

        for j in (i + 1)..images.len() {
            if claimed[j] {
                continue;
            }

            let distance = match metric.distance(&anchor.fingerprint, &images[j].fingerprint) {
                Ok(d) => d,
                Err(err) => {
                    // A single bad comparison must not abort the pass
                    log::warn!(
                        "Failed to compare {} with {}: {err}",
                        anchor.path.display(),
                        images[j].path.display()
                    );
                    continue;
                }
            };

            if threshold.accepts(distance, metric.max_distance()) {
                group.push(&images[j]);
                claimed[j] = true;
            }
        }

        if group.has_duplicates() {
            log::debug!(
                "Group anchored at {}: {} member(s)",
                anchor.path.display(),
                group.len()
            );
            groups.push(group);
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::DistanceError;
    use std::path::PathBuf;

    /// Deterministic fake: integer fingerprints with absolute-difference
    /// distance.
    struct AbsDiff {
        max: u32,
    }

    impl FingerprintMetric<u32> for AbsDiff {
        fn distance(&self, a: &u32, b: &u32) -> Result<u32, DistanceError> {
            Ok(a.abs_diff(*b))
        }

        fn max_distance(&self) -> u32 {
            self.max
        }
    }

    /// Fake metric that fails for any pair involving a marker fingerprint.
    struct Flaky {
        max: u32,
        poison: u32,
    }

    impl FingerprintMetric<u32> for Flaky {
        fn distance(&self, a: &u32, b: &u32) -> Result<u32, DistanceError> {
            if *a == self.poison || *b == self.poison {
                return Err(DistanceError::IncompatibleFingerprints);
            }
            Ok(a.abs_diff(*b))
        }

        fn max_distance(&self) -> u32 {
            self.max
        }
    }

    fn img(path: &str, fingerprint: u32) -> FingerprintedImage<u32> {
        FingerprintedImage::new(PathBuf::from(path), fingerprint)
    }

    fn threshold(pct: f64) -> SimilarityThreshold {
        SimilarityThreshold::from_percentage(pct).unwrap()
    }

    fn group_paths<F>(groups: &[SimilarGroup<'_, F>]) -> Vec<Vec<PathBuf>> {
        groups.iter().map(SimilarGroup::paths).collect()
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let images: Vec<FingerprintedImage<u32>> = Vec::new();
        let groups = group_similar(&images, threshold(50.0), &AbsDiff { max: 10 });
        assert!(groups.is_empty());
    }

    #[test]
    fn test_singletons_are_discarded() {
        // Pairwise distances all exceed the threshold
        let images = vec![img("/a.png", 0), img("/b.png", 50), img("/c.png", 100)];
        let groups = group_similar(&images, threshold(90.0), &AbsDiff { max: 100 });
        assert!(groups.is_empty());
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        // distance 5 of max 10 => similarity exactly 0.5
        let images = vec![img("/a.png", 0), img("/b.png", 5)];

        let groups = group_similar(&images, threshold(50.0), &AbsDiff { max: 10 });
        assert_eq!(group_paths(&groups), vec![vec![
            PathBuf::from("/a.png"),
            PathBuf::from("/b.png"),
        ]]);

        let groups = group_similar(&images, threshold(60.0), &AbsDiff { max: 10 });
        assert!(groups.is_empty());
    }

    #[test]
    fn test_anchor_is_first_in_input_order() {
        let images = vec![img("/z.png", 1), img("/a.png", 2)];
        let groups = group_similar(&images, threshold(50.0), &AbsDiff { max: 10 });

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].anchor().path, PathBuf::from("/z.png"));
    }

    #[test]
    fn test_non_transitive_membership() {
        // A~B and B~C pass, but A~C fails: C must not join through B.
        let images = vec![img("/a.png", 0), img("/b.png", 5), img("/c.png", 10)];
        let groups = group_similar(&images, threshold(50.0), &AbsDiff { max: 10 });

        assert_eq!(group_paths(&groups), vec![vec![
            PathBuf::from("/a.png"),
            PathBuf::from("/b.png"),
        ]]);
    }

    #[test]
    fn test_claimed_images_stay_claimed() {
        // B joins A's group; the later pair (B, C) must not form a group
        // even though their distance would pass.
        let images = vec![img("/a.png", 0), img("/b.png", 4), img("/c.png", 8)];
        let groups = group_similar(&images, threshold(60.0), &AbsDiff { max: 10 });

        // d(A,B)=4 passes (0.6 >= 0.6), d(A,C)=8 fails, C is left alone
        assert_eq!(group_paths(&groups), vec![vec![
            PathBuf::from("/a.png"),
            PathBuf::from("/b.png"),
        ]]);
    }

    #[test]
    fn test_multiple_groups() {
        let images = vec![
            img("/a.png", 0),
            img("/b.png", 1),
            img("/c.png", 50),
            img("/d.png", 51),
        ];
        let groups = group_similar(&images, threshold(95.0), &AbsDiff { max: 100 });

        assert_eq!(
            group_paths(&groups),
            vec![
                vec![PathBuf::from("/a.png"), PathBuf::from("/b.png")],
                vec![PathBuf::from("/c.png"), PathBuf::from("/d.png")],
            ]
        );
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let images = vec![
            img("/a.png", 3),
            img("/b.png", 7),
            img("/c.png", 4),
            img("/d.png", 90),
        ];
        let first = group_similar(&images, threshold(80.0), &AbsDiff { max: 100 });
        let second = group_similar(&images, threshold(80.0), &AbsDiff { max: 100 });

        assert_eq!(group_paths(&first), group_paths(&second));
    }

    #[test]
    fn test_distance_error_skips_pair_only() {
        // The poisoned fingerprint fails every comparison and ends up in no
        // group; the remaining pair still groups.
        let images = vec![img("/a.png", 0), img("/bad.png", 99), img("/c.png", 1)];
        let metric = Flaky { max: 10, poison: 99 };
        let groups = group_similar(&images, threshold(50.0), &metric);

        assert_eq!(group_paths(&groups), vec![vec![
            PathBuf::from("/a.png"),
            PathBuf::from("/c.png"),
        ]]);
    }
}
