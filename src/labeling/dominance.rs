//! Dominance between labels resident at the same vertex.

/// Decides whether one label's resources make another label redundant.
///
/// Only containers resident at the same vertex are ever compared. A true
/// result must be consistent with the per-dimension order: every dimension of
/// `a` less than or equal to (or, for nominal dimensions, equal to) the
/// corresponding dimension of `b`.
///
/// Exactly equal containers need no special handling here: the engine
/// discards the later-created of two equal labels itself, using creation
/// order as an implicit tie-break resource. Without that rule a graph with
/// many resource-identical paths into one vertex grows its frontier without
/// bound, so the tie-break is required for termination rather than a
/// convenience. Implementations may compare with `<=` per dimension (equality
/// included) or strictly; frontiers stay finite either way.
///
/// A label is never compared against itself, and no transitivity beyond what
/// the per-dimension order already provides is assumed.
pub trait Dominance<C> {
    /// Returns true if resources `a` render resources `b` redundant.
    fn dominates(&self, a: &C, b: &C) -> bool;
}
