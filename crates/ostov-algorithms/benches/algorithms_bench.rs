use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ostov_algorithms::{dijkstra, kruskal, prim, strongly_connected_components};
use ostov_core::graph::{Graph, GraphBuilder};

/// Ring of `n` vertices plus chords, weights spread so ties are rare.
fn ring_with_chords(n: u32) -> Graph<u32> {
    let mut builder = GraphBuilder::new(n as usize).ordered();
    for i in 1..=n {
        let next = if i == n { 1 } else { i + 1 };
        builder = builder.weighted_edge(i, next, f64::from(i % 7 + 1));
        if i % 3 == 0 {
            let across = (i + n / 2 - 1) % n + 1;
            builder = builder.weighted_edge(i, across, f64::from(i % 11 + 2));
        }
    }
    builder.build().expect("bench graph")
}

fn bench_mst(c: &mut Criterion) {
    let graph = ring_with_chords(200);
    c.bench_function("kruskal_200", |b| b.iter(|| kruskal(black_box(&graph))));
    c.bench_function("prim_200", |b| b.iter(|| prim(black_box(&graph))));
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = ring_with_chords(200);
    c.bench_function("dijkstra_200", |b| {
        b.iter(|| dijkstra(black_box(&graph), &1).expect("source exists"));
    });
}

fn bench_scc(c: &mut Criterion) {
    let graph = ring_with_chords(200);
    c.bench_function("scc_200", |b| {
        b.iter(|| strongly_connected_components(black_box(&graph)));
    });
}

criterion_group!(benches, bench_mst, bench_shortest_path, bench_scc);
criterion_main!(benches);
