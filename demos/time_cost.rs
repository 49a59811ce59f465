//! Demonstration of the exact-cost time/cost model: cost windows per vertex,
//! a non-monotonic cost dimension, and a custom dominance rule.

use rcsp::models::{AdditiveExtension, ResourceDelta, VertexWindows};
use rcsp::{validate_path, Dominance, LabelSetting, ResourceVec, ResourceGraph, SolveOptions, Window};

/// Keeps the cheapest-in-time label per distinct accumulated cost.
struct EqualCostDominance;

impl Dominance<ResourceVec> for EqualCostDominance {
    fn dominates(&self, a: &ResourceVec, b: &ResourceVec) -> bool {
        a[1] == b[1] && a[0] <= b[0]
    }
}

fn cost_windows(min: f64, max: f64) -> VertexWindows {
    VertexWindows::new(vec![Window::unbounded(), Window::new(min, max)])
}

fn step(cost: f64) -> ResourceDelta {
    ResourceDelta::new(vec![1.0, cost])
}

fn main() {
    // Start, two detour vertices, and a goal that admits only an accumulated
    // cost of exactly 2. Detour edges can raise or lower the cost.
    let mut graph = ResourceGraph::new();
    let start = graph.add_vertex(cost_windows(-20.0, 20.0));
    let a = graph.add_vertex(cost_windows(-20.0, 20.0));
    let b = graph.add_vertex(cost_windows(-20.0, 20.0));
    let goal = graph.add_vertex(cost_windows(2.0, 2.0));

    graph.add_edge(start, a, step(3.0)).unwrap();
    graph.add_edge(start, a, step(-3.0)).unwrap();
    graph.add_edge(a, start, step(0.0)).unwrap();
    graph.add_edge(start, b, step(5.0)).unwrap();
    graph.add_edge(start, b, step(-5.0)).unwrap();
    graph.add_edge(b, start, step(0.0)).unwrap();
    graph.add_edge(start, goal, step(0.0)).unwrap();

    // The cost dimension decreases along some edges, so the run carries a
    // treated-label budget instead of relying on monotonic termination.
    let solver = LabelSetting::with_options(SolveOptions {
        max_treated: Some(10_000),
        ..SolveOptions::default()
    });

    let initial = ResourceVec::zeros(2);
    let solutions = solver
        .solve(
            &graph,
            start,
            goal,
            initial.clone(),
            &AdditiveExtension,
            &EqualCostDominance,
        )
        .unwrap();

    println!("Pareto-optimal paths to the goal: {}", solutions.len());
    println!("=================================");

    for (i, solution) in solutions.iter().enumerate() {
        println!();
        println!(
            "Path {}: {} edges, resources (time, cost) = {}",
            i,
            solution.len(),
            solution.resources()
        );
        for edge in solution.edges() {
            let (from, to) = graph.endpoints(*edge).unwrap();
            let deltas = graph.edge(*edge).unwrap().deltas();
            println!("  {:?} -> {:?} (cost {:+})", from, to, deltas[1]);
        }

        let check = validate_path(
            &graph,
            solution.edges(),
            initial.clone(),
            solution.resources(),
            &AdditiveExtension,
        );
        println!(
            "  replay: path={} feasible={} correctly extended={}",
            check.is_path, check.is_feasible, check.is_correctly_extended
        );
    }
}
