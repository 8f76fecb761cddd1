//! 图数据结构
//!
//! 两种算法共同读取的不可变输入图

use super::edge::Edge;
use super::index::EndpointIndex;
use super::node::Node;
use crate::error::{Error, Result};
use crate::types::{NodeId, PropertyValue};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// 图
///
/// 构造完成后只读。顶点顺序决定 Prim 的起点（第一个顶点）。
#[derive(Debug, Clone)]
pub struct Graph {
    /// 顶点（按输入顺序）
    nodes: Vec<Node>,
    /// 边（按输入顺序）
    edges: Vec<Edge>,
    /// 端点索引
    index: EndpointIndex,
}

/// 图的基本信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInfo {
    /// 顶点数
    pub vertices: usize,
    /// 边数
    pub total_edges: usize,
}

impl Graph {
    /// 创建图，顶点标识必须唯一
    ///
    /// 只出现在边上的端点按首次出现顺序追加到顶点列表末尾，
    /// 因此所有端点都是顶点，`node_count()` 覆盖全部端点。
    pub fn new(mut nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !seen.insert(node.id().clone()) {
                return Err(Error::DuplicateNode(node.id().to_string()));
            }
        }

        let declared = nodes.len();
        for edge in &edges {
            for id in [edge.start(), edge.end()] {
                if seen.insert(id.clone()) {
                    nodes.push(Node::new(id.clone()));
                }
            }
        }
        if nodes.len() > declared {
            debug!(
                declared,
                appended = nodes.len() - declared,
                "graph: 追加只出现在边上的端点"
            );
        }

        let index = EndpointIndex::build(&nodes, &edges);
        Ok(Self {
            nodes,
            edges,
            index,
        })
    }

    /// 空图
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            index: EndpointIndex::default(),
        }
    }

    /// 构建器
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 获取顶点数量
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Prim 的起点
    pub fn seed(&self) -> Option<&NodeId> {
        self.nodes.first().map(Node::id)
    }

    /// 是否包含该顶点
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.index.get(id).is_some()
    }

    /// 获取顶点
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).and_then(|i| self.nodes.get(i))
    }

    /// 与顶点关联的边（按输入顺序）
    pub fn incident_edges<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = &'a Edge> + 'a {
        let incident: &[usize] = match self.index.get(id) {
            Some(i) => self.index.incident(i),
            None => &[],
        };
        incident.iter().map(move |&e| &self.edges[e])
    }

    /// 所有顶点标识（与 `nodes()` 同序）
    pub fn endpoint_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.index.ids()
    }

    /// 端点索引
    pub fn endpoint_index(&self) -> &EndpointIndex {
        &self.index
    }

    pub fn info(&self) -> GraphInfo {
        GraphInfo {
            vertices: self.nodes.len(),
            total_edges: self.edges.len(),
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::empty()
    }
}

/// 图构建器
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// 添加顶点
    pub fn node(mut self, id: impl Into<NodeId>) -> Self {
        self.nodes.push(Node::new(id));
        self
    }

    /// 添加已构造的顶点
    pub fn node_with(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// 批量添加顶点
    pub fn nodes<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        self.nodes.extend(ids.into_iter().map(Node::new));
        self
    }

    /// 添加边
    pub fn edge(mut self, start: impl Into<NodeId>, end: impl Into<NodeId>, weight: f64) -> Self {
        self.edges.push(Edge::new(start, end, weight));
        self
    }

    /// 添加带负载的边
    pub fn edge_with_payload(
        mut self,
        start: impl Into<NodeId>,
        end: impl Into<NodeId>,
        weight: f64,
        payload: PropertyValue,
    ) -> Self {
        self.edges.push(Edge::with_payload(start, end, weight, payload));
        self
    }

    pub fn build(self) -> Result<Graph> {
        Graph::new(self.nodes, self.edges)
    }
}
