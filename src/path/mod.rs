//! Pareto-optimal path extraction and independent validation.

mod validator;

pub use validator::{validate_path, PathCheck};

use petgraph::graph::EdgeIndex;

use crate::labeling::label::{LabelArena, LabelId};

/// One Pareto-optimal result: the edges of the path in source→target order
/// and the resources accumulated at the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<C> {
    edges: Vec<EdgeIndex>,
    resources: C,
}

impl<C> Solution<C> {
    pub(crate) fn new(edges: Vec<EdgeIndex>, resources: C) -> Self {
        Self { edges, resources }
    }

    /// Edges in source→target order; empty for the trivial path.
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    /// Resources accumulated over the whole path.
    pub fn resources(&self) -> &C {
        &self.resources
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True for the trivial (source == target) path.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Walks predecessor links from `last` back to the initial label and returns
/// the crossed edges in source→target order.
///
/// The chain is a simple sequence of distinct labels, each created strictly
/// after its predecessor, so the walk terminates and cannot revisit a label.
pub(crate) fn reconstruct<C>(arena: &LabelArena<C>, last: LabelId) -> Vec<EdgeIndex> {
    let mut edges = Vec::new();
    let mut current = Some(last);
    while let Some(id) = current {
        let label = arena.get(id);
        if let Some(edge) = label.edge() {
            edges.push(edge);
        }
        current = label.predecessor();
    }
    edges.reverse();
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeling::label::Label;
    use petgraph::graph::NodeIndex;

    #[test]
    fn test_reconstruct_orders_edges_source_to_target() {
        let mut arena: LabelArena<i32> = LabelArena::new();
        let root = arena.push(Label {
            resources: 0,
            vertex: NodeIndex::new(0),
            edge: None,
            pred: None,
        });
        let mid = arena.push(Label {
            resources: 1,
            vertex: NodeIndex::new(1),
            edge: Some(EdgeIndex::new(10)),
            pred: Some(root),
        });
        let last = arena.push(Label {
            resources: 2,
            vertex: NodeIndex::new(2),
            edge: Some(EdgeIndex::new(11)),
            pred: Some(mid),
        });

        assert_eq!(
            reconstruct(&arena, last),
            vec![EdgeIndex::new(10), EdgeIndex::new(11)]
        );
    }

    #[test]
    fn test_reconstruct_initial_label_is_trivial() {
        let mut arena: LabelArena<i32> = LabelArena::new();
        let root = arena.push(Label {
            resources: 0,
            vertex: NodeIndex::new(0),
            edge: None,
            pred: None,
        });

        assert!(reconstruct(&arena, root).is_empty());
    }
}
