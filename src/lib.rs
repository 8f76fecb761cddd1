//! MstGraph - 最小生成树计算引擎
//!
//! 面向可视化场景的最小生成树库，支持：
//! - Kruskal（排序 + 并查集）与 Prim（二叉堆）两种算法
//! - 逐步构建快照，便于回放每一步接受的边
//! - 重复运行取平均耗时的基准测试与算法对比
//! - GeoJSON / JSON / CSV 图数据导入

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    benchmark, compare, BenchmarkConfig, BenchmarkResult, Comparison, Kruskal, MstEngine,
    MstResult, Prim, UnionFind,
};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphBuilder, Node};
pub use import::{load_graph, GraphImporter, ImportFormat};
pub use types::{Algorithm, NodeId, PropertyValue};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
