//! rcsp - Resource-Constrained Shortest Paths
//!
//! A label-setting dynamic-programming library computing the Pareto-optimal
//! set of paths between two vertices of a directed graph, where each path
//! accumulates multi-dimensional resources that must stay within per-vertex
//! feasibility windows. Resource extension and dominance are pluggable
//! strategies, so the same engine serves time windows, cost budgets, and
//! mixed trade-offs.

pub mod graph;
pub mod labeling;
pub mod models;
pub mod path;
pub mod resources;

// Re-export the types most callers touch for ergonomic use
pub use graph::{GraphError, ResourceGraph};
pub use labeling::{
    Dominance, Extension, LabelSetting, ResourceExtension, SolveError, SolveOptions,
};
pub use path::{validate_path, PathCheck, Solution};
pub use resources::{ResourceContainer, ResourceVec, Window};
