//! Kruskal 与 Prim 在网格图上的性能对比

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mstgraph::algorithm::MstEngine;
use mstgraph::graph::Graph;
use mstgraph::types::{Algorithm, NodeId};

/// side × side 的网格图，权重按坐标确定性生成
fn grid(side: i64) -> Graph {
    let id = |r: i64, c: i64| NodeId::Int(r * side + c);
    let mut builder = Graph::builder().nodes((0..side * side).map(NodeId::Int));
    for r in 0..side {
        for c in 0..side {
            let w = ((r * 31 + c * 17) % 97) as f64 + 1.0;
            if c + 1 < side {
                builder = builder.edge(id(r, c), id(r, c + 1), w);
            }
            if r + 1 < side {
                builder = builder.edge(id(r, c), id(r + 1, c), w + 0.5);
            }
        }
    }
    builder.build().expect("grid graph")
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst_grid");
    for side in [10_i64, 30, 60] {
        let graph = grid(side);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), side * side),
                &graph,
                |b, graph| {
                    let engine = algorithm.engine();
                    b.iter(|| black_box(engine.run(black_box(graph)).map(|r| r.total_weight)))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
