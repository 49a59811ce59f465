//! Label-setting main loop with candidate admission and harvesting.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::Ordering;

use petgraph::graph::NodeIndex;

use crate::graph::ResourceGraph;
use crate::path::{reconstruct, Solution};
use crate::resources::ResourceContainer;

use super::dominance::Dominance;
use super::error::SolveError;
use super::extension::ResourceExtension;
use super::frontier::Frontier;
use super::label::{Label, LabelArena, LabelId, LabelState};
use super::observer::Observer;
use super::SolveOptions;

/// Runs the search: treat one untreated label per iteration, extend it along
/// all outgoing edges, admit surviving candidates, and stop when no untreated
/// label remains. The unflagged residents of the target vertex are the
/// Pareto-optimal solution set.
pub(crate) fn run<V, E, X, D, O>(
    graph: &ResourceGraph<V, E>,
    source: NodeIndex,
    target: NodeIndex,
    initial: X::Container,
    extension: &X,
    dominance: &D,
    options: &SolveOptions,
    observer: &mut O,
) -> Result<Vec<Solution<X::Container>>, SolveError>
where
    X: ResourceExtension<V, E>,
    D: Dominance<X::Container>,
    O: Observer<X::Container>,
{
    if !graph.contains_vertex(source) {
        return Err(SolveError::MissingSource(source));
    }
    if !graph.contains_vertex(target) {
        return Err(SolveError::MissingTarget(target));
    }

    let mut arena: LabelArena<X::Container> = LabelArena::new();
    let mut frontiers: HashMap<NodeIndex, Frontier> = HashMap::new();
    let mut untreated: VecDeque<LabelId> = VecDeque::new();

    let root = arena.push(Label {
        resources: initial,
        vertex: source,
        edge: None,
        pred: None,
    });
    frontiers.entry(source).or_default().insert(root);
    observer.on_created(root, source, arena.get(root).resources());
    untreated.push_back(root);

    let mut treated = 0usize;

    while let Some(current) = untreated.pop_front() {
        // Evicted labels linger in the queue as dead entries.
        if arena.state(current) != LabelState::Untreated {
            continue;
        }
        if let Some(flag) = &options.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(SolveError::Cancelled);
            }
        }
        if let Some(budget) = options.max_treated {
            if treated >= budget {
                return Err(SolveError::BudgetExceeded { budget });
            }
        }

        let at = arena.get(current).vertex();
        arena.set_state(current, LabelState::Treated);
        if let Some(frontier) = frontiers.get_mut(&at) {
            frontier.mark_treated(current);
        }
        treated += 1;

        let from = arena.get(current).resources().clone();
        for (edge, next, weight) in graph.out_edges(at) {
            let next_weight = match graph.vertex(next) {
                Some(w) => w,
                None => continue,
            };
            let extended = extension.extend(&from, weight, next_weight);
            if !extended.feasible {
                observer.on_infeasible(next, &extended.resources);
                continue;
            }

            let frontier = frontiers.entry(next).or_default();
            if frontier.rejects(&arena, dominance, &extended.resources) {
                observer.on_dominated(next, &extended.resources);
                continue;
            }
            for evicted in frontier.displace(&arena, dominance, &extended.resources) {
                arena.set_state(evicted, LabelState::Discarded);
                observer.on_evicted(evicted);
            }

            let admitted = arena.push(Label {
                resources: extended.resources,
                vertex: next,
                edge: Some(edge),
                pred: Some(current),
            });
            frontiers
                .entry(next)
                .or_default()
                .insert(admitted);
            observer.on_created(admitted, next, arena.get(admitted).resources());
            untreated.push_back(admitted);
        }
    }

    let mut solutions = Vec::new();
    if let Some(frontier) = frontiers.get(&target) {
        for resident in frontier.residents() {
            if resident.dominated {
                continue;
            }
            let label = arena.get(resident.id);
            observer.on_accepted(resident.id, label.resources());
            solutions.push(Solution::new(
                reconstruct(&arena, resident.id),
                label.resources().clone(),
            ));
        }
    }
    solutions.sort_by(|a, b| a.resources().total_cmp(b.resources()));
    Ok(solutions)
}
