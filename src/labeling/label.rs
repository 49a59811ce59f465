//! Labels and the arena that owns them for the duration of one run.

use petgraph::graph::{EdgeIndex, NodeIndex};

/// Stable handle of a label within one engine run.
///
/// Ids are handed out in creation order, so comparing two ids answers which
/// label was created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelId(u32);

impl LabelId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Lifecycle of a label inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabelState {
    /// Admitted to a frontier, not yet extended along outgoing edges.
    Untreated,
    /// Extended along all outgoing edges of its vertex.
    Treated,
    /// Evicted from its frontier by a dominating label.
    Discarded,
}

/// One path-so-far: accumulated resources plus the back-link that created it.
///
/// Labels are immutable once created. The predecessor link is an arena index
/// rather than an owning pointer, so predecessor chains and frontier
/// membership cannot form ownership cycles, and a whole run tears down by
/// dropping the arena.
#[derive(Debug, Clone)]
pub(crate) struct Label<C> {
    pub(crate) resources: C,
    pub(crate) vertex: NodeIndex,
    pub(crate) edge: Option<EdgeIndex>,
    pub(crate) pred: Option<LabelId>,
}

impl<C> Label<C> {
    pub(crate) fn resources(&self) -> &C {
        &self.resources
    }

    /// Vertex this label resides at.
    pub(crate) fn vertex(&self) -> NodeIndex {
        self.vertex
    }

    /// Edge crossed to create this label; `None` for the initial label.
    pub(crate) fn edge(&self) -> Option<EdgeIndex> {
        self.edge
    }

    /// Label this one was extended from; `None` for the initial label.
    pub(crate) fn predecessor(&self) -> Option<LabelId> {
        self.pred
    }
}

/// Owns every label admitted during one engine run.
///
/// Arena position doubles as the creation sequence number; ids are never
/// reused and entries are never removed, only state-tagged.
#[derive(Debug)]
pub(crate) struct LabelArena<C> {
    labels: Vec<Label<C>>,
    states: Vec<LabelState>,
}

impl<C> LabelArena<C> {
    pub(crate) fn new() -> Self {
        Self {
            labels: Vec::new(),
            states: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, label: Label<C>) -> LabelId {
        let id = LabelId(self.labels.len() as u32);
        self.labels.push(label);
        self.states.push(LabelState::Untreated);
        id
    }

    pub(crate) fn get(&self, id: LabelId) -> &Label<C> {
        &self.labels[id.index()]
    }

    pub(crate) fn state(&self, id: LabelId) -> LabelState {
        self.states[id.index()]
    }

    pub(crate) fn set_state(&mut self, id: LabelId, state: LabelState) {
        self.states[id.index()] = state;
    }
}
