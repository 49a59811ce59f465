use petgraph::graph::NodeIndex;
use thiserror::Error;

/// Errors terminating an engine run early.
///
/// An unreachable target is not among them: it yields an empty solution set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Source vertex {0:?} is not in the graph")]
    MissingSource(NodeIndex),

    #[error("Target vertex {0:?} is not in the graph")]
    MissingTarget(NodeIndex),

    #[error("Treated-label budget of {budget} exhausted before the frontiers settled")]
    BudgetExceeded { budget: usize },

    #[error("Run cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_exceeded_display() {
        let e = SolveError::BudgetExceeded { budget: 16 };
        assert_eq!(
            e.to_string(),
            "Treated-label budget of 16 exhausted before the frontiers settled"
        );
    }

    #[test]
    fn missing_source_display() {
        let e = SolveError::MissingSource(NodeIndex::new(3));
        assert!(e.to_string().contains("not in the graph"));
    }
}
