//! Additive multi-dimensional resources with per-vertex windows.
//!
//! The classic resource-constrained setting: each edge adds a fixed
//! per-dimension increment, and a vertex admits a label only if every
//! accumulated dimension lies inside the vertex's window for that dimension.
//! Negative increments are allowed, with the label-correcting caveats
//! described on [`ResourceExtension`].

use crate::labeling::{Dominance, Extension, ResourceExtension};
use crate::resources::{ResourceVec, Window};

/// Per-dimension feasibility windows carried by a vertex.
///
/// Holds exactly one window per resource dimension; use
/// [`Window::unbounded`] for dimensions a vertex does not constrain.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexWindows(Vec<Window>);

impl VertexWindows {
    pub fn new(windows: Vec<Window>) -> Self {
        Self(windows)
    }

    /// Windows admitting anything, for vertices without constraints.
    pub fn unbounded(dimensions: usize) -> Self {
        Self(vec![Window::unbounded(); dimensions])
    }

    pub fn windows(&self) -> &[Window] {
        &self.0
    }

    /// True if every dimension of `resources` lies within its window.
    ///
    /// # Panics
    ///
    /// Panics if the dimension counts differ.
    pub fn admits(&self, resources: &ResourceVec) -> bool {
        assert_eq!(
            self.0.len(),
            resources.len(),
            "resource dimension count mismatch"
        );
        self.0
            .iter()
            .zip(resources.values())
            .all(|(window, &value)| window.contains(value))
    }
}

/// Per-dimension increments carried by an edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceDelta(Vec<f64>);

impl ResourceDelta {
    pub fn new(deltas: Vec<f64>) -> Self {
        Self(deltas)
    }

    pub fn deltas(&self) -> &[f64] {
        &self.0
    }
}

/// Adds the edge's increments elementwise and checks the target vertex's
/// windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveExtension;

impl ResourceExtension<VertexWindows, ResourceDelta> for AdditiveExtension {
    type Container = ResourceVec;

    fn extend(
        &self,
        from: &ResourceVec,
        edge: &ResourceDelta,
        target: &VertexWindows,
    ) -> Extension<ResourceVec> {
        let resources = from.offset(edge.deltas());
        let feasible = target.admits(&resources);
        Extension {
            resources,
            feasible,
        }
    }
}

/// Dominance when every dimension is `<=`.
///
/// Equal containers count as dominating (the comparison must be `<=`, not
/// `<`); the engine's creation-order tie-break then keeps the earlier label,
/// which is what bounds frontiers when many paths accumulate identical
/// totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentwiseDominance;

impl Dominance<ResourceVec> for ComponentwiseDominance {
    fn dominates(&self, a: &ResourceVec, b: &ResourceVec) -> bool {
        a.len() == b.len()
            && a.values()
                .iter()
                .zip(b.values())
                .all(|(x, y)| x <= y)
    }
}
