//! Independent replay of candidate paths through the extension function.

use petgraph::graph::EdgeIndex;

use crate::graph::ResourceGraph;
use crate::labeling::ResourceExtension;

/// Verdicts from replaying an edge sequence, reported independently so
/// callers can tell the failure modes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathCheck {
    /// Consecutive edges connect head-to-tail and every edge exists in the
    /// graph. The empty sequence counts as the trivial path.
    pub is_path: bool,
    /// Every extension along the sequence stayed within its target vertex's
    /// feasibility bounds.
    pub is_feasible: bool,
    /// Replaying from the initial container reproduced the claimed final
    /// container.
    pub is_correctly_extended: bool,
}

impl PathCheck {
    /// True when all three verdicts hold.
    pub fn is_valid(&self) -> bool {
        self.is_path && self.is_feasible && self.is_correctly_extended
    }

    fn broken() -> Self {
        Self {
            is_path: false,
            is_feasible: false,
            is_correctly_extended: false,
        }
    }
}

/// Replays `edges` from `initial` through `extension` and cross-checks the
/// final container against `claimed`.
///
/// A deliberately separate code path from the engine: it keeps no engine
/// state and recomputes every extension from scratch, so a defect on either
/// side shows up as a mismatch. Verdicts are data, never errors; an edge
/// index that does not exist in the graph yields all three verdicts false.
pub fn validate_path<V, E, X>(
    graph: &ResourceGraph<V, E>,
    edges: &[EdgeIndex],
    initial: X::Container,
    claimed: &X::Container,
    extension: &X,
) -> PathCheck
where
    X: ResourceExtension<V, E>,
{
    let mut is_path = true;
    let mut is_feasible = true;
    let mut resources = initial;
    let mut previous_target = None;

    for &edge in edges {
        let (from, to) = match graph.endpoints(edge) {
            Some(endpoints) => endpoints,
            None => return PathCheck::broken(),
        };
        if let Some(expected) = previous_target {
            if from != expected {
                is_path = false;
            }
        }
        previous_target = Some(to);

        let (weight, target) = match (graph.edge(edge), graph.vertex(to)) {
            (Some(weight), Some(target)) => (weight, target),
            _ => return PathCheck::broken(),
        };
        let extended = extension.extend(&resources, weight, target);
        if !extended.feasible {
            is_feasible = false;
        }
        resources = extended.resources;
    }

    PathCheck {
        is_path,
        is_feasible,
        is_correctly_extended: resources == *claimed,
    }
}
