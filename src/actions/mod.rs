//! Actions that mutate the filesystem.

pub mod reclaim;

pub use reclaim::{reclaim_group, ReclaimError};
