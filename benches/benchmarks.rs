//! Criterion benchmarks for edgemap.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use edgemap::{DirectedGraph, GraphReader, GraphWriter};

/// Build a random graph with roughly `edges_per_node` outgoing edges each.
fn make_graph(node_count: u64, edges_per_node: usize) -> DirectedGraph<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = DirectedGraph::new();
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            graph.add_edge(i, target, "bench", rng.gen_range(0.1..10.0));
        }
    }
    graph
}

fn bench_add_edge(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("add_edge_to_10k", |b| {
        b.iter(|| {
            let src = rng.gen_range(0..10_000u64);
            let tgt = rng.gen_range(0..10_000u64);
            graph.add_edge(src, tgt, "bench", 0.5);
        })
    });
}

fn bench_contains_edge(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);
    let mut rng = StdRng::seed_from_u64(2);

    c.bench_function("contains_edge_10k", |b| {
        b.iter(|| {
            let src = rng.gen_range(0..10_000u64);
            let tgt = rng.gen_range(0..10_000u64);
            graph.contains_edge(&src, &tgt)
        })
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = make_graph(10_000, 4);

    c.bench_function("shortest_path_10k", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| {
            let src = rng.gen_range(0..10_000u64);
            let dest = rng.gen_range(0..10_000u64);
            graph.shortest_path(&src, &dest)
        })
    });
}

fn bench_is_connected(c: &mut Criterion) {
    let graph = make_graph(10_000, 4);

    c.bench_function("is_connected_10k", |b| {
        let mut rng = StdRng::seed_from_u64(4);
        b.iter(|| {
            let u = rng.gen_range(0..10_000u64);
            let v = rng.gen_range(0..10_000u64);
            graph.is_connected(&u, &v)
        })
    });
}

fn bench_write_file(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);

    c.bench_function("write_file_10k", |b| {
        b.iter(|| {
            let tmp = NamedTempFile::new().unwrap();
            GraphWriter::write_to_file(&graph, tmp.path()).unwrap();
        })
    });
}

fn bench_read_file(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);
    let tmp = NamedTempFile::new().unwrap();
    GraphWriter::write_to_file(&graph, tmp.path()).unwrap();

    c.bench_function("read_file_10k", |b| {
        b.iter(|| GraphReader::read_from_file(tmp.path()).unwrap())
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_contains_edge,
    bench_shortest_path,
    bench_is_connected,
    bench_write_file,
    bench_read_file,
);
criterion_main!(benches);
