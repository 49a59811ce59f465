//! Per-vertex frontier of non-dominated labels.

use super::dominance::Dominance;
use super::label::{LabelArena, LabelId};

/// A label resident at a vertex, with its treatment bookkeeping.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resident {
    pub(crate) id: LabelId,
    /// Set once the label has been extended along all outgoing edges.
    pub(crate) treated: bool,
    /// Set when a later label dominates this one after it was already
    /// treated: the extensions it produced stand, but it drops out of the
    /// accepted result set.
    pub(crate) dominated: bool,
}

/// Resident labels of one vertex.
///
/// Invariant: no two residents with `dominated == false` dominate each
/// other. Candidates dominated by any resident are never admitted; admitting
/// a candidate evicts the untreated residents it dominates and flags the
/// treated ones.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    residents: Vec<Resident>,
}

impl Frontier {
    pub(crate) fn residents(&self) -> &[Resident] {
        &self.residents
    }

    pub(crate) fn insert(&mut self, id: LabelId) {
        self.residents.push(Resident {
            id,
            treated: false,
            dominated: false,
        });
    }

    pub(crate) fn mark_treated(&mut self, id: LabelId) {
        if let Some(resident) = self.residents.iter_mut().find(|r| r.id == id) {
            resident.treated = true;
        }
    }

    /// Dominance gate for a candidate container. Returns true if some
    /// resident dominates `candidate` or carries exactly equal resources
    /// (residents were created earlier, so the earlier label wins ties).
    pub(crate) fn rejects<C, D>(&self, arena: &LabelArena<C>, dominance: &D, candidate: &C) -> bool
    where
        C: PartialEq,
        D: Dominance<C>,
    {
        self.residents.iter().any(|resident| {
            let resources = arena.get(resident.id).resources();
            dominance.dominates(resources, candidate) || resources == candidate
        })
    }

    /// Removes untreated residents dominated by `newcomer` and flags treated
    /// ones. Returns the evicted ids so the caller can retire them.
    pub(crate) fn displace<C, D>(
        &mut self,
        arena: &LabelArena<C>,
        dominance: &D,
        newcomer: &C,
    ) -> Vec<LabelId>
    where
        D: Dominance<C>,
    {
        let mut evicted = Vec::new();
        self.residents.retain_mut(|resident| {
            if !dominance.dominates(newcomer, arena.get(resident.id).resources()) {
                return true;
            }
            if resident.treated {
                resident.dominated = true;
                true
            } else {
                evicted.push(resident.id);
                false
            }
        });
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeling::label::Label;
    use petgraph::graph::NodeIndex;

    struct LessEq;

    impl Dominance<i32> for LessEq {
        fn dominates(&self, a: &i32, b: &i32) -> bool {
            a <= b
        }
    }

    fn push(arena: &mut LabelArena<i32>, resources: i32) -> LabelId {
        arena.push(Label {
            resources,
            vertex: NodeIndex::new(0),
            edge: None,
            pred: None,
        })
    }

    #[test]
    fn test_rejects_dominated_candidate() {
        let mut arena = LabelArena::new();
        let mut frontier = Frontier::default();
        frontier.insert(push(&mut arena, 3));

        assert!(frontier.rejects(&arena, &LessEq, &5));
        assert!(frontier.rejects(&arena, &LessEq, &3));
        assert!(!frontier.rejects(&arena, &LessEq, &2));
    }

    #[test]
    fn test_equal_resources_reject_even_under_strict_dominance() {
        struct Strict;
        impl Dominance<i32> for Strict {
            fn dominates(&self, a: &i32, b: &i32) -> bool {
                a < b
            }
        }

        let mut arena = LabelArena::new();
        let mut frontier = Frontier::default();
        frontier.insert(push(&mut arena, 3));

        assert!(frontier.rejects(&arena, &Strict, &3));
    }

    #[test]
    fn test_displace_evicts_untreated_and_flags_treated() {
        let mut arena = LabelArena::new();
        let mut frontier = Frontier::default();
        let treated = push(&mut arena, 8);
        let untreated = push(&mut arena, 9);
        frontier.insert(treated);
        frontier.insert(untreated);
        frontier.mark_treated(treated);

        let evicted = frontier.displace(&arena, &LessEq, &2);
        assert_eq!(evicted, vec![untreated]);

        let residents = frontier.residents();
        assert_eq!(residents.len(), 1);
        assert_eq!(residents[0].id, treated);
        assert!(residents[0].dominated);
    }
}
