use std::collections::BTreeMap;

use gopt_core::{NodeId, SolveOptions};
use gopt_flow::{conservation_residuals, solve_max_flow};
use gopt_graph::{FlowArc, FlowNetwork};
use gopt_solver::MicrolpBackend;

const TOLERANCE: f64 = 1e-6;

fn network(arcs: &[(u64, u64, f64)], source: u64, sink: u64) -> FlowNetwork {
    let listing: Vec<FlowArc> = arcs
        .iter()
        .map(|(from, to, _)| FlowArc::from_raw(*from, *to))
        .collect();
    let capacities: BTreeMap<FlowArc, f64> = arcs
        .iter()
        .map(|(from, to, capacity)| (FlowArc::from_raw(*from, *to), *capacity))
        .collect();
    FlowNetwork::new(
        listing,
        capacities,
        NodeId::from_raw(source),
        NodeId::from_raw(sink),
    )
    .unwrap()
}

#[test]
fn diamond_network_reaches_twenty() {
    // 15 direct plus 5 through the middle node, bounded by its out-arc.
    let network = network(&[(0, 1, 10.0), (1, 2, 5.0), (0, 2, 15.0)], 0, 2);
    let solution = solve_max_flow(&network, &MicrolpBackend::new(), &SolveOptions::default())
        .unwrap();

    assert!((solution.value - 20.0).abs() < TOLERANCE);
    assert!((solution.flows[&FlowArc::from_raw(1, 2)] - 5.0).abs() < TOLERANCE);
    assert!((solution.flows[&FlowArc::from_raw(0, 2)] - 15.0).abs() < TOLERANCE);
}

#[test]
fn flows_respect_capacities_and_conservation() {
    let network = network(
        &[
            (0, 1, 4.0),
            (0, 2, 3.0),
            (1, 3, 2.0),
            (2, 3, 5.0),
            (1, 2, 1.0),
        ],
        0,
        3,
    );
    let solution = solve_max_flow(&network, &MicrolpBackend::new(), &SolveOptions::default())
        .unwrap();

    for arc in network.arcs() {
        let flow = solution.flows[arc];
        assert!(flow >= -TOLERANCE);
        assert!(flow <= network.capacity(*arc).unwrap() + TOLERANCE);
    }
    for (_, residual) in conservation_residuals(&network, &solution.flows) {
        assert!(residual.abs() < TOLERANCE);
    }
    assert!((solution.value - 6.0).abs() < TOLERANCE);
}

#[test]
fn disconnected_sink_yields_zero_flow() {
    // Reaching the sink is impossible; zero flow is a valid answer, not an
    // error.
    let network = network(&[(0, 1, 7.0), (2, 3, 4.0)], 0, 3);
    let solution = solve_max_flow(&network, &MicrolpBackend::new(), &SolveOptions::default())
        .unwrap();
    assert!(solution.value.abs() < TOLERANCE);
}

#[test]
fn arcs_into_the_source_carry_nothing() {
    // The cycle 0 -> 1 -> 0 could otherwise inflate the objective.
    let network = network(&[(0, 1, 5.0), (1, 0, 5.0), (1, 2, 3.0)], 0, 2);
    let solution = solve_max_flow(&network, &MicrolpBackend::new(), &SolveOptions::default())
        .unwrap();

    assert!(solution.flows[&FlowArc::from_raw(1, 0)].abs() < TOLERANCE);
    assert!((solution.value - 3.0).abs() < TOLERANCE);
}

#[test]
fn zero_capacity_self_loop_contributes_nothing() {
    let network = network(&[(1, 1, 0.0), (0, 1, 2.0), (1, 2, 2.0)], 0, 2);
    let solution = solve_max_flow(&network, &MicrolpBackend::new(), &SolveOptions::default())
        .unwrap();
    assert!((solution.value - 2.0).abs() < TOLERANCE);
    assert!(solution.flows[&FlowArc::from_raw(1, 1)].abs() < TOLERANCE);
}

#[test]
fn empty_network_short_circuits() {
    let network = FlowNetwork::new(
        Vec::new(),
        BTreeMap::new(),
        NodeId::from_raw(0),
        NodeId::from_raw(1),
    )
    .unwrap();
    let solution = solve_max_flow(&network, &MicrolpBackend::new(), &SolveOptions::default())
        .unwrap();
    assert_eq!(solution.value, 0.0);
    assert!(solution.flows.is_empty());
}

#[test]
fn repeated_solves_agree_on_the_optimum() {
    let network = network(&[(0, 1, 10.0), (1, 2, 5.0), (0, 2, 15.0)], 0, 2);
    let backend = MicrolpBackend::new();
    let first = solve_max_flow(&network, &backend, &SolveOptions::default()).unwrap();
    let second = solve_max_flow(&network, &backend, &SolveOptions::default()).unwrap();
    assert!((first.value - second.value).abs() < TOLERANCE);
}
