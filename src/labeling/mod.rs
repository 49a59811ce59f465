//! Label-setting search for Pareto-optimal resource-constrained paths.
//!
//! The engine maintains, per vertex, a frontier of mutually non-dominated
//! labels (partial paths with their accumulated resources) and repeatedly:
//!
//! 1. Picks an untreated label. FIFO order keeps runs deterministic; any
//!    selection order yields the same solution set under a monotonic
//!    extension function, so the order is a performance knob only.
//! 2. Extends it across every outgoing edge through the
//!    [`ResourceExtension`] strategy; infeasible extensions are dropped on
//!    the spot.
//! 3. Gates each feasible candidate against the target vertex's frontier:
//!    a candidate dominated by any resident, or exactly equal to one (the
//!    earlier-created label wins), is discarded. An admitted candidate
//!    evicts the untreated residents it dominates; treated residents it
//!    dominates keep their already-produced extensions but drop out of the
//!    result set.
//! 4. Stops when no untreated label remains. The surviving residents of the
//!    target vertex, each traced back through its predecessor chain, form
//!    the Pareto-optimal solution set — empty when the target is
//!    unreachable, which is a result rather than an error.
//!
//! With an extension function that never decreases a dimension and finite
//! per-vertex windows, every frontier is finite and the search terminates.
//! Complexity is pseudo-polynomial in the resource ranges and can grow
//! exponentially with the number of dimensions; that is a property of the
//! problem, not of the engine. Non-monotonic extension functions turn the
//! search into label-correcting — see [`ResourceExtension`] for the
//! preconditions and [`SolveOptions::max_treated`] for bounding such runs.

mod dominance;
mod engine;
mod error;
mod extension;
mod frontier;
pub(crate) mod label;
mod observer;


pub use dominance::Dominance;
pub use error::SolveError;
pub use extension::{Extension, ResourceExtension};
pub use label::LabelId;
pub use observer::{NoopObserver, Observer};

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use petgraph::graph::NodeIndex;

use crate::graph::ResourceGraph;
use crate::path::Solution;

/// Knobs bounding a single engine run.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Maximum number of labels the engine may treat before giving up with
    /// [`SolveError::BudgetExceeded`]. Required for termination when the
    /// extension function is not monotonic and no finite windows bound the
    /// decreasing dimensions. `None` means unbounded.
    pub max_treated: Option<usize>,

    /// Cooperative cancellation flag, checked once per main-loop iteration.
    pub cancel: Option<Arc<AtomicBool>>,
}

/// Label-setting solver producing the Pareto-optimal path set between two
/// vertices.
#[derive(Debug, Clone, Default)]
pub struct LabelSetting {
    options: SolveOptions,
}

impl LabelSetting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SolveOptions) -> Self {
        Self { options }
    }

    /// Runs the search and returns one [`Solution`] per Pareto-optimal label
    /// at `target`, sorted by the container total order.
    ///
    /// An unreachable `target` yields an empty set. When `source == target`
    /// the initial label itself is accepted as the trivial path.
    ///
    /// # Errors
    ///
    /// - `MissingSource` / `MissingTarget` if either vertex is not in the graph
    /// - `BudgetExceeded` if [`SolveOptions::max_treated`] ran out
    /// - `Cancelled` if the cancellation flag was raised
    pub fn solve<V, E, X, D>(
        &self,
        graph: &ResourceGraph<V, E>,
        source: NodeIndex,
        target: NodeIndex,
        initial: X::Container,
        extension: &X,
        dominance: &D,
    ) -> Result<Vec<Solution<X::Container>>, SolveError>
    where
        X: ResourceExtension<V, E>,
        D: Dominance<X::Container>,
    {
        self.solve_with_observer(
            graph,
            source,
            target,
            initial,
            extension,
            dominance,
            &mut NoopObserver,
        )
    }

    /// Like [`solve`](Self::solve), with an [`Observer`] receiving label
    /// lifecycle notifications.
    #[allow(clippy::too_many_arguments)]
    pub fn solve_with_observer<V, E, X, D, O>(
        &self,
        graph: &ResourceGraph<V, E>,
        source: NodeIndex,
        target: NodeIndex,
        initial: X::Container,
        extension: &X,
        dominance: &D,
        observer: &mut O,
    ) -> Result<Vec<Solution<X::Container>>, SolveError>
    where
        X: ResourceExtension<V, E>,
        D: Dominance<X::Container>,
        O: Observer<X::Container>,
    {
        engine::run(
            graph,
            source,
            target,
            initial,
            extension,
            dominance,
            &self.options,
            observer,
        )
    }
}
