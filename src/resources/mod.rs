//! Resource containers and per-dimension feasibility windows.

mod vector;
mod window;

pub use vector::ResourceVec;
pub use window::Window;

use std::cmp::Ordering;
use std::fmt::Debug;

/// Accumulated resource values carried by a partial path.
///
/// A container is an ordered tuple of scalar amounts, one per resource
/// dimension. The engine clones containers freely (once per admitted label),
/// compares them for exact equality when tie-breaking, and sorts results with
/// [`total_cmp`](Self::total_cmp), so implementations should be cheap to copy
/// and the order must be total and consistent with equality.
pub trait ResourceContainer: Clone + PartialEq + Debug {
    /// Total order over containers (lexicographic or domain-defined).
    ///
    /// Used for deterministic frontier bookkeeping and result ordering, not
    /// for dominance decisions.
    fn total_cmp(&self, other: &Self) -> Ordering;
}
