//! Similar-image groups.

use std::path::PathBuf;

use crate::scanner::FingerprintedImage;

/// A group of images judged similar to its anchor.
///
/// Members are in discovery order and the first member is the anchor every
/// other member was measured against; distances between non-anchor members
/// carry no guarantee. The grouper only emits groups with at least two
/// members.
#[derive(Debug)]
pub struct SimilarGroup<'a, F> {
    members: Vec<&'a FingerprintedImage<F>>,
}

impl<'a, F> SimilarGroup<'a, F> {
    /// Start a group seeded with its anchor.
    #[must_use]
    pub fn new(anchor: &'a FingerprintedImage<F>) -> Self {
        Self {
            members: vec![anchor],
        }
    }

    /// Append a member judged similar to the anchor.
    pub fn push(&mut self, image: &'a FingerprintedImage<F>) {
        self.members.push(image);
    }

    /// The anchor: the first-discovered member.
    #[must_use]
    pub fn anchor(&self) -> &'a FingerprintedImage<F> {
        self.members[0]
    }

    /// All members in insertion order, anchor first.
    #[must_use]
    pub fn members(&self) -> &[&'a FingerprintedImage<F>] {
        &self.members
    }

    /// Number of members, anchor included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether this group is worth emitting (two or more members).
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.members.len() > 1
    }

    /// The member paths in insertion order.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.members.iter().map(|m| m.path.clone()).collect()
    }
}
