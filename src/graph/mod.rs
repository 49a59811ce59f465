//! Directed graph carrying vertex feasibility data and edge resource
//! increments.
//!
//! Purely a data holder: vertices hold whatever the extension function reads
//! as feasibility bounds, edges hold resource increment descriptors. The
//! labeling engine only reads this structure; constructing it from external
//! data is the caller's job.

mod error;

pub use error::GraphError;

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::EdgeRef;

/// Directed graph over vertex weights `V` and edge weights `E`.
///
/// # Invariants
///
/// - Every edge references vertices present in the graph;
///   [`add_edge`](Self::add_edge) rejects stale indices
/// - Weights are immutable once inserted; the engine assumes a fixed graph
///   for the duration of a run
/// - Parallel edges between the same pair of vertices are permitted and keep
///   distinct indices
#[derive(Debug, Clone)]
pub struct ResourceGraph<V, E> {
    graph: StableDiGraph<V, E>,
}

impl<V, E> Default for ResourceGraph<V, E> {
    fn default() -> Self {
        Self {
            graph: StableDiGraph::default(),
        }
    }
}

impl<V, E> ResourceGraph<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            graph: StableDiGraph::with_capacity(vertices, edges),
        }
    }

    /// Adds a vertex and returns its stable index.
    pub fn add_vertex(&mut self, weight: V) -> NodeIndex {
        self.graph.add_node(weight)
    }

    /// Adds a directed edge `from` → `to`.
    ///
    /// # Errors
    ///
    /// `InvalidVertex` if either endpoint is not in the graph.
    pub fn add_edge(
        &mut self,
        from: NodeIndex,
        to: NodeIndex,
        weight: E,
    ) -> Result<EdgeIndex, GraphError> {
        if !self.graph.contains_node(from) {
            return Err(GraphError::InvalidVertex(from));
        }
        if !self.graph.contains_node(to) {
            return Err(GraphError::InvalidVertex(to));
        }
        Ok(self.graph.add_edge(from, to, weight))
    }

    pub fn contains_vertex(&self, vertex: NodeIndex) -> bool {
        self.graph.contains_node(vertex)
    }

    pub fn vertex(&self, vertex: NodeIndex) -> Option<&V> {
        self.graph.node_weight(vertex)
    }

    pub fn edge(&self, edge: EdgeIndex) -> Option<&E> {
        self.graph.edge_weight(edge)
    }

    /// Returns `(source, target)` of an edge, if it exists.
    pub fn endpoints(&self, edge: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(edge)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    /// Iterates the outgoing edges of `vertex` as
    /// `(edge index, target vertex, edge weight)`.
    pub fn out_edges(
        &self,
        vertex: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, NodeIndex, &E)> + '_ {
        self.graph
            .edges(vertex)
            .map(|e| (e.id(), e.target(), e.weight()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertices_and_edges() {
        let mut graph: ResourceGraph<&str, f64> = ResourceGraph::new();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        let e = graph.add_edge(a, b, 1.5).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.vertex(a), Some(&"a"));
        assert_eq!(graph.edge(e), Some(&1.5));
        assert_eq!(graph.endpoints(e), Some((a, b)));
    }

    #[test]
    fn test_add_edge_rejects_stale_vertex() {
        let mut graph: ResourceGraph<(), ()> = ResourceGraph::new();
        let a = graph.add_vertex(());
        let ghost = NodeIndex::new(42);

        assert_eq!(
            graph.add_edge(a, ghost, ()),
            Err(GraphError::InvalidVertex(ghost))
        );
        assert_eq!(
            graph.add_edge(ghost, a, ()),
            Err(GraphError::InvalidVertex(ghost))
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_parallel_edges_keep_distinct_indices() {
        let mut graph: ResourceGraph<(), i32> = ResourceGraph::new();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let e1 = graph.add_edge(a, b, 3).unwrap();
        let e2 = graph.add_edge(a, b, -3).unwrap();

        assert_ne!(e1, e2);
        assert_eq!(graph.edge_count(), 2);

        let weights: Vec<i32> = graph.out_edges(a).map(|(_, _, w)| *w).collect();
        assert_eq!(weights.len(), 2);
        assert!(weights.contains(&3));
        assert!(weights.contains(&-3));
    }

    #[test]
    fn test_out_edges_reports_targets() {
        let mut graph: ResourceGraph<(), ()> = ResourceGraph::new();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(a, c, ()).unwrap();

        let mut targets: Vec<NodeIndex> = graph.out_edges(a).map(|(_, t, _)| t).collect();
        targets.sort();
        assert_eq!(targets, vec![b, c]);
        assert_eq!(graph.out_edges(b).count(), 0);
    }
}
