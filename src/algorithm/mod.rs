//! 图算法模块
//!
//! 包含 Kruskal、Prim 两种最小生成树算法和基准测试

mod benchmark;
mod kruskal;
mod prim;
mod result;
mod union_find;

pub use benchmark::{
    benchmark, benchmark_with, compare, BenchmarkConfig, BenchmarkResult, Comparison,
    ComparisonRow,
};
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use result::{MstResult, StepCursor};
pub use union_find::UnionFind;

use crate::error::Result;
use crate::graph::Graph;
use crate::types::Algorithm;

/// 最小生成树引擎
///
/// 每次调用各自持有并查集 / 候选堆等状态，多个调用可以共享同一个只读 `Graph`。
pub trait MstEngine {
    fn algorithm(&self) -> Algorithm;

    fn run(&self, graph: &Graph) -> Result<MstResult>;
}

impl Algorithm {
    /// 获取算法对应的引擎
    pub fn engine(&self) -> &'static dyn MstEngine {
        match self {
            Algorithm::Kruskal => &Kruskal,
            Algorithm::Prim => &Prim,
        }
    }

    /// 在图上运行该算法
    pub fn run(&self, graph: &Graph) -> Result<MstResult> {
        self.engine().run(graph)
    }
}
