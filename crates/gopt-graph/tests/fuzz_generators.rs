use gopt_core::rng::RngHandle;
use gopt_core::NodeId;
use gopt_graph::{gen_gnp, gen_layered_network, SimpleGraph};
use proptest::prelude::*;

fn check_simple(graph: &SimpleGraph) {
    for (u, v) in graph.edges().iter().copied() {
        assert!(u < v);
        assert!(v < graph.n());
        assert!(graph.neighbors(u).any(|w| w == v));
        assert!(graph.neighbors(v).any(|w| w == u));
    }
    let degree_sum: usize = (0..graph.n()).map(|v| graph.degree(v)).sum();
    assert_eq!(degree_sum, 2 * graph.num_edges());
}

proptest! {
    #[test]
    fn gnp_graphs_are_simple_and_deterministic(seed in any::<u64>(), n in 0usize..24) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = gen_gnp(n, 0.4, &mut rng).unwrap();
        check_simple(&graph);

        let mut rng = RngHandle::from_seed(seed);
        let replay = gen_gnp(n, 0.4, &mut rng).unwrap();
        prop_assert_eq!(graph, replay);
    }

    #[test]
    fn layered_networks_are_well_formed(seed in any::<u64>(), layers in 1usize..4, width in 1usize..4) {
        let mut rng = RngHandle::from_seed(seed);
        let network = gen_layered_network(layers, width, 10, &mut rng).unwrap();

        prop_assert_eq!(network.num_arcs(), 2 * width + (layers - 1) * width * width);
        for arc in network.arcs() {
            let capacity = network.capacity(*arc).unwrap();
            prop_assert!((1.0..=10.0).contains(&capacity));
        }
        // The source only feeds the first rank and the sink only drains the last.
        prop_assert_eq!(network.arcs_into(network.source()).count(), 0);
        prop_assert_eq!(network.arcs_from(network.sink()).count(), 0);
    }
}

#[test]
fn gnp_rejects_bad_probability() {
    let mut rng = RngHandle::from_seed(1);
    let err = gen_gnp(4, 1.5, &mut rng).unwrap_err();
    assert_eq!(err.info().code, "invalid-probability");
}

#[test]
fn layered_network_source_and_sink_are_distinct() {
    let mut rng = RngHandle::from_seed(7);
    let network = gen_layered_network(2, 3, 5, &mut rng).unwrap();
    assert_ne!(network.source(), network.sink());
    assert_eq!(network.source(), NodeId::from_raw(0));
}
