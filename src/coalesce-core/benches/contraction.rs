//! Benchmarks for full graph contraction on generated graphs.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use coalesce_core::{BoruvkaContraction, Graph};

fn generated_graph(node_limit: u32, edge_count: u32, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    for _ in 0..edge_count {
        graph.add_edge(rng.gen_range(0..node_limit), rng.gen_range(0..node_limit));
    }
    graph
}

fn bench_contraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("contraction");

    for &(nodes, edges) in &[(75u32, 50u32), (300, 400), (1000, 2000)] {
        let graph = generated_graph(nodes, edges, 7);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{nodes}n-{edges}e")),
            &graph,
            |b, graph| {
                b.iter(|| {
                    let mut automaton = BoruvkaContraction::with_seed(black_box(graph), 11);
                    automaton.run_to_completion()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_contraction);
criterion_main!(benches);
