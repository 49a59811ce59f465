//! Resource extension: how a container changes when a label crosses an edge.

use crate::resources::ResourceContainer;

/// Outcome of extending a resource container across one edge.
///
/// The extended container is reported even when the extension is infeasible,
/// so that independent replay (see [`validate_path`](crate::path::validate_path))
/// can keep accumulating and compare final totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Extension<C> {
    /// Container after applying the edge's resource increments.
    pub resources: C,
    /// True iff every dimension of `resources` lies within the target
    /// vertex's feasibility bounds.
    pub feasible: bool,
}

/// Resource extension function: computes the container a label would carry
/// after crossing one edge, together with a feasibility verdict.
///
/// Implementations must be pure functions of their inputs. The engine invokes
/// [`extend`](Self::extend) exactly once per (label, outgoing edge) pair and
/// assumes the result is reproducible;
/// [`validate_path`](crate::path::validate_path) relies on that to replay
/// engine output through an independent code path.
///
/// # Monotonicity
///
/// Label-setting terminates on general graphs only if every resource
/// dimension is non-decreasing along any path. An extension function that can
/// decrease a dimension (e.g. a negative cost increment) degrades the search
/// to label-correcting: termination is then only guaranteed when per-vertex
/// windows bound the decreasing dimensions, or when the caller supplies an
/// iteration budget via
/// [`SolveOptions::max_treated`](crate::labeling::SolveOptions). This is a
/// caller precondition; the engine does not detect violations.
pub trait ResourceExtension<V, E> {
    /// Container type accumulated along paths.
    type Container: ResourceContainer;

    /// Extends `from` across an edge with weight `edge` into a vertex with
    /// weight `target`.
    fn extend(&self, from: &Self::Container, edge: &E, target: &V) -> Extension<Self::Container>;
}
