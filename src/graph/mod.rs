//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构

mod edge;
mod graph;
mod index;
mod node;

pub use edge::Edge;
pub use graph::{Graph, GraphBuilder, GraphInfo};
pub use index::{EndpointIndex, Incidence};
pub use node::Node;
