//! Property tests over randomly generated multigraphs.

use ostov::{
    boruvka, condensation, dijkstra, kruskal, prim, strongly_connected_components, Graph,
    GraphBuilder,
};
use proptest::prelude::*;

/// Endpoint pairs over a small ordered label range; loops and parallel
/// edges included by construction.
fn endpoints(max_label: u32) -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((1..=max_label, 1..=max_label), 0..24)
}

/// Endpoint pairs over a variable label range, down to a single vertex, so
/// degenerate graphs (loop-only, edgeless) are generated too.
fn sized_endpoints() -> impl Strategy<Value = (u32, Vec<(u32, u32)>)> {
    (1u32..=6).prop_flat_map(|max_label| {
        (
            Just(max_label),
            prop::collection::vec((1..=max_label, 1..=max_label), 0..24),
        )
    })
}

/// Distinct weights: a shuffled `1.0..=len` sequence.
fn distinct_weights(len: usize) -> impl Strategy<Value = Vec<f64>> {
    Just((1..=len).map(|i| i as f64).collect::<Vec<_>>()).prop_shuffle()
}

fn build(max_label: u32, pairs: &[(u32, u32)], weights: &[f64]) -> Graph<u32> {
    let mut builder = GraphBuilder::new(max_label as usize).ordered();
    for (&(tail, head), &weight) in pairs.iter().zip(weights) {
        builder = builder.weighted_edge(tail, head, weight);
    }
    builder.build().expect("ordered build cannot fail")
}

proptest! {
    #[test]
    fn degree_sum_is_twice_edge_count(
        pairs in endpoints(6),
    ) {
        let weights = vec![0.0; pairs.len()];
        let graph = build(6, &pairs, &weights);
        let sum: usize = graph.vertices().map(|v| graph.degree(v)).sum();
        prop_assert_eq!(sum, 2 * graph.edge_count());
    }

    #[test]
    fn simplification_is_idempotent(
        pairs in endpoints(6),
    ) {
        let weights = vec![1.0; pairs.len()];
        let graph = build(6, &pairs, &weights);
        let once = graph.to_simple_graph();
        let twice = once.to_simple_graph();
        prop_assert_eq!(once.vertex_count(), twice.vertex_count());
        prop_assert_eq!(once.edge_count(), twice.edge_count());
        prop_assert_eq!(once.edges(), twice.edges());
        prop_assert!(once.loop_vertices_with_multiplicity().is_empty());
        prop_assert!(once.parallel_edges_with_multiplicity().is_empty());
    }

    #[test]
    fn mst_total_weights_agree_on_distinct_weights(
        (max_label, pairs, weights) in sized_endpoints()
            .prop_flat_map(|(max_label, pairs)| {
                let len = pairs.len();
                (Just(max_label), Just(pairs), distinct_weights(len))
            }),
    ) {
        let graph = build(max_label, &pairs, &weights);
        let by_prim = prim(&graph);
        let by_kruskal = kruskal(&graph);
        let by_boruvka = boruvka(&graph);

        prop_assert_eq!(by_prim.spanning, by_kruskal.spanning);
        prop_assert_eq!(by_kruskal.spanning, by_boruvka.spanning);
        if by_kruskal.spanning {
            prop_assert_eq!(by_prim.total_weight, by_kruskal.total_weight);
            prop_assert_eq!(by_kruskal.total_weight, by_boruvka.total_weight);
        }
    }

    #[test]
    fn scc_is_a_partition_and_condensation_is_acyclic(
        pairs in endpoints(5),
    ) {
        let weights = vec![1.0; pairs.len()];
        let graph = build(5, &pairs, &weights);
        let scc = strongly_connected_components(&graph);

        let total: usize = scc.members.iter().map(Vec::len).sum();
        prop_assert_eq!(total, graph.vertex_count());
        for vertex in graph.vertices() {
            prop_assert!(scc.members[scc.component(vertex)].contains(&vertex));
        }

        let meta = condensation(&graph, &scc).unwrap();
        prop_assert!(meta.is_acyclic());
    }

    #[test]
    fn topological_order_respects_every_edge(
        pairs in endpoints(6),
    ) {
        // orient every non-loop pair small -> large: a DAG by construction
        let pairs: Vec<(u32, u32)> = pairs
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        let weights = vec![0.0; pairs.len()];
        let graph = build(6, &pairs, &weights);
        prop_assert!(graph.is_acyclic());

        let order = graph.topological_sort().unwrap();
        let position = |v| order.iter().position(|&x| x == v).unwrap();
        for edge in graph.edges() {
            prop_assert!(position(edge.tail()) < position(edge.head()));
        }
    }

    #[test]
    fn relaxation_reaches_a_fixpoint(
        pairs in endpoints(5),
    ) {
        let weights: Vec<f64> = (0..pairs.len()).map(|i| (i % 7) as f64 + 0.5).collect();
        let graph = build(5, &pairs, &weights);
        let paths = dijkstra(&graph, &1).unwrap();

        let source = graph.vertex(&1).unwrap();
        prop_assert_eq!(paths.distance(source), Some(0.0));
        for edge in graph.edges() {
            if let (Some(du), Some(dv)) =
                (paths.distance(edge.tail()), paths.distance(edge.head()))
            {
                prop_assert!(dv <= du + edge.weight() + 1e-9);
            }
        }
    }
}
