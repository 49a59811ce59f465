//! Demonstration of a three-dimensional trade-off frontier with the
//! ready-made additive model.

use rcsp::models::{AdditiveExtension, ComponentwiseDominance, ResourceDelta, VertexWindows};
use rcsp::{LabelSetting, ResourceGraph, ResourceVec, Window};

fn main() {
    // Dimensions: (travel time, toll cost, battery drain). Every vertex
    // tolerates at most 100 units of battery drain.
    let windows = VertexWindows::new(vec![
        Window::unbounded(),
        Window::unbounded(),
        Window::new(0.0, 100.0),
    ]);

    let mut graph = ResourceGraph::new();
    let depot = graph.add_vertex(windows.clone());
    let highway = graph.add_vertex(windows.clone());
    let backroad = graph.add_vertex(windows.clone());
    let ferry = graph.add_vertex(windows.clone());
    let city = graph.add_vertex(windows);

    // Fast and expensive.
    graph
        .add_edge(depot, highway, ResourceDelta::new(vec![10.0, 8.0, 30.0]))
        .unwrap();
    graph
        .add_edge(highway, city, ResourceDelta::new(vec![10.0, 8.0, 30.0]))
        .unwrap();

    // Slow and cheap.
    graph
        .add_edge(depot, backroad, ResourceDelta::new(vec![40.0, 0.0, 20.0]))
        .unwrap();
    graph
        .add_edge(backroad, city, ResourceDelta::new(vec![40.0, 0.0, 20.0]))
        .unwrap();

    // Cheap on battery, pricey, middling time.
    graph
        .add_edge(depot, ferry, ResourceDelta::new(vec![25.0, 12.0, 5.0]))
        .unwrap();
    graph
        .add_edge(ferry, city, ResourceDelta::new(vec![25.0, 12.0, 5.0]))
        .unwrap();

    // Direct but dominated: slower and costlier than the highway route.
    graph
        .add_edge(depot, city, ResourceDelta::new(vec![30.0, 20.0, 70.0]))
        .unwrap();

    let solutions = LabelSetting::new()
        .solve(
            &graph,
            depot,
            city,
            ResourceVec::zeros(3),
            &AdditiveExtension,
            &ComponentwiseDominance,
        )
        .unwrap();

    println!("Pareto frontier depot -> city: {} routes", solutions.len());
    println!("==================================");
    for solution in &solutions {
        println!(
            "{} edges, (time, toll, battery) = {}",
            solution.len(),
            solution.resources()
        );
    }
}
