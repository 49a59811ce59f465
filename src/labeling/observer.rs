//! Side-channel notifications from the engine.

use petgraph::graph::NodeIndex;

use super::label::LabelId;

/// Receives notifications as the engine creates, discards, and accepts
/// labels.
///
/// This is the crate's diagnostics surface: progress reporting, counting,
/// and tracing hang off it instead of any embedded logging. All methods
/// default to no-ops, so implementations override only what they watch.
pub trait Observer<C> {
    /// A feasible, non-dominated label was admitted at `vertex`.
    fn on_created(&mut self, _id: LabelId, _vertex: NodeIndex, _resources: &C) {}

    /// An extension into `vertex` fell outside its feasibility bounds.
    fn on_infeasible(&mut self, _vertex: NodeIndex, _resources: &C) {}

    /// A candidate at `vertex` was discarded because a resident label
    /// dominates it (or carries equal resources and was created earlier).
    fn on_dominated(&mut self, _vertex: NodeIndex, _resources: &C) {}

    /// An untreated resident was evicted by a newly admitted label.
    fn on_evicted(&mut self, _id: LabelId) {}

    /// A label at the target vertex survived to the end of the run.
    fn on_accepted(&mut self, _id: LabelId, _resources: &C) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<C> Observer<C> for NoopObserver {}
