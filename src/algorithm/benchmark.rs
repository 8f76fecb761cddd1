//! 基准测试
//!
//! 在同一输入上顺序重复运行算法，得到稳定的平均耗时

use super::result::MstResult;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Algorithm;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

/// 基准配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// 计时的运行次数
    pub iterations: usize,
    /// 不计时的预热次数
    pub warmup: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: 1,
            warmup: 0,
        }
    }
}

impl BenchmarkConfig {
    /// 用于算法间耗时对比的稳定配置
    pub fn stable() -> Self {
        Self {
            iterations: 1000,
            warmup: 10,
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }
}

/// 基准结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// 最后一次运行的结果
    pub result: MstResult,
    /// 平均耗时（毫秒）
    pub avg_time_ms: f64,
    pub iterations: usize,
}

/// 运行 `iterations` 次，返回最后一次的结果和平均耗时
pub fn benchmark(algorithm: Algorithm, graph: &Graph, iterations: usize) -> Result<BenchmarkResult> {
    benchmark_with(
        algorithm,
        graph,
        &BenchmarkConfig::default().with_iterations(iterations),
    )
}

/// 按配置运行基准
pub fn benchmark_with(
    algorithm: Algorithm,
    graph: &Graph,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult> {
    if config.iterations == 0 {
        return Err(Error::InvalidArgument(
            "迭代次数必须大于 0".to_string(),
        ));
    }

    let engine = algorithm.engine();
    for _ in 0..config.warmup {
        engine.run(graph)?;
    }

    let started = Instant::now();
    let mut last = engine.run(graph)?;
    for _ in 1..config.iterations {
        last = engine.run(graph)?;
    }
    let avg_time_ms = started.elapsed().as_secs_f64() * 1000.0 / config.iterations as f64;

    debug!(
        %algorithm,
        iterations = config.iterations,
        warmup = config.warmup,
        avg_time_ms,
        "benchmark: done"
    );
    if !last.is_spanning_tree(graph.node_count()) {
        warn!(
            %algorithm,
            nodes = graph.node_count(),
            edges = last.edge_count(),
            "图不连通，结果为生成森林或起点所在分量的生成树"
        );
    }

    Ok(BenchmarkResult {
        result: last,
        avg_time_ms,
        iterations: config.iterations,
    })
}

/// 对比表中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub algorithm: Algorithm,
    pub total_weight: f64,
    pub avg_time_ms: f64,
    pub edge_count: usize,
}

/// 两种算法的对比
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub kruskal: BenchmarkResult,
    pub prim: BenchmarkResult,
}

impl Comparison {
    pub fn rows(&self) -> [ComparisonRow; 2] {
        [row(&self.kruskal), row(&self.prim)]
    }

    /// 总权重是否一致（允许浮点累加误差）
    pub fn weights_agree(&self) -> bool {
        let a = self.kruskal.result.total_weight;
        let b = self.prim.result.total_weight;
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }
}

fn row(bench: &BenchmarkResult) -> ComparisonRow {
    ComparisonRow {
        algorithm: bench.result.algorithm,
        total_weight: bench.result.total_weight,
        avg_time_ms: bench.avg_time_ms,
        edge_count: bench.result.edge_count(),
    }
}

/// 依次运行 Kruskal 和 Prim
pub fn compare(graph: &Graph, config: &BenchmarkConfig) -> Result<Comparison> {
    let kruskal = benchmark_with(Algorithm::Kruskal, graph, config)?;
    let prim = benchmark_with(Algorithm::Prim, graph, config)?;
    Ok(Comparison { kruskal, prim })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph {
        Graph::builder()
            .nodes(["A", "B", "C", "D"])
            .edge("A", "B", 1.0)
            .edge("B", "C", 4.0)
            .edge("C", "D", 2.0)
            .edge("D", "A", 3.0)
            .edge("A", "C", 5.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_benchmark_single_run() {
        let bench = benchmark(Algorithm::Kruskal, &square(), 1).unwrap();
        assert_eq!(bench.iterations, 1);
        assert_eq!(bench.result.total_weight, 6.0);
        assert!(bench.avg_time_ms >= 0.0);
    }

    #[test]
    fn test_benchmark_repeated_is_stable() {
        let graph = square();
        let once = benchmark(Algorithm::Prim, &graph, 1).unwrap();
        let many = benchmark_with(
            Algorithm::Prim,
            &graph,
            &BenchmarkConfig::default().with_iterations(50).with_warmup(3),
        )
        .unwrap();

        assert_eq!(many.iterations, 50);
        assert_eq!(once.result.final_edges(), many.result.final_edges());
        assert_eq!(once.result.total_weight, many.result.total_weight);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = benchmark(Algorithm::Kruskal, &square(), 0);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_prim_error_propagates() {
        let result = benchmark(Algorithm::Prim, &Graph::empty(), 3);
        assert!(matches!(result, Err(Error::EmptyGraph)));
    }

    #[test]
    fn test_compare_rows() {
        let comparison = compare(&square(), &BenchmarkConfig::default()).unwrap();
        let rows = comparison.rows();

        assert!(comparison.weights_agree());
        assert_eq!(rows[0].algorithm, Algorithm::Kruskal);
        assert_eq!(rows[1].algorithm, Algorithm::Prim);
        assert_eq!(rows[0].edge_count, 3);
        assert_eq!(rows[1].edge_count, 3);
    }

    #[test]
    fn test_stable_config() {
        let config = BenchmarkConfig::stable();
        assert_eq!(config.iterations, 1000);
        assert_eq!(BenchmarkConfig::default().iterations, 1);
    }
}
