use petgraph::graph::NodeIndex;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid vertex index: {0:?}")]
    InvalidVertex(NodeIndex),
}
