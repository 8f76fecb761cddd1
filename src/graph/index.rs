//! 端点索引
//!
//! 为顶点标识分配稠密下标，并记录每个端点关联的边

use crate::graph::edge::Edge;
use crate::graph::node::Node;
use crate::types::NodeId;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// 单个端点的关联边下标（按输入顺序）
pub type Incidence = SmallVec<[usize; 4]>;

/// 端点索引
///
/// 下标与顶点顺序一致；`build` 遇到未出现在顶点中的端点时按首次出现顺序追加。
#[derive(Debug, Clone, Default)]
pub struct EndpointIndex {
    /// 顶点标识到下标的映射
    ids: IndexMap<NodeId, usize>,
    /// 下标到关联边的映射
    incidence: Vec<Incidence>,
    /// 每条边两个端点的下标
    endpoints: Vec<(usize, usize)>,
}

impl EndpointIndex {
    /// 从顶点和边构建索引。顶点标识须已去重。
    pub(crate) fn build(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut index = Self {
            ids: IndexMap::with_capacity(nodes.len()),
            incidence: Vec::with_capacity(nodes.len()),
            endpoints: Vec::with_capacity(edges.len()),
        };

        for node in nodes {
            index.intern(node.id());
        }

        for (i, edge) in edges.iter().enumerate() {
            let s = index.intern(edge.start());
            let e = index.intern(edge.end());
            index.endpoints.push((s, e));
            index.incidence[s].push(i);
            // 自环只记录一次
            if e != s {
                index.incidence[e].push(i);
            }
        }

        index
    }

    fn intern(&mut self, id: &NodeId) -> usize {
        if let Some(&i) = self.ids.get(id) {
            return i;
        }
        let i = self.ids.len();
        self.ids.insert(id.clone(), i);
        self.incidence.push(Incidence::new());
        i
    }

    /// 查找下标
    pub fn get(&self, id: &NodeId) -> Option<usize> {
        self.ids.get(id).copied()
    }

    /// 下标对应的顶点标识
    pub fn id_at(&self, index: usize) -> Option<&NodeId> {
        self.ids.get_index(index).map(|(id, _)| id)
    }

    /// 某个下标关联的边
    pub fn incident(&self, index: usize) -> &[usize] {
        self.incidence
            .get(index)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// 第 `edge` 条边两个端点的下标
    pub fn endpoints(&self, edge: usize) -> (usize, usize) {
        self.endpoints[edge]
    }

    /// 所有端点
    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.ids.keys()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_order() {
        let nodes = vec![Node::new("B"), Node::new("A")];
        let edges = vec![Edge::new("A", "C", 1.0), Edge::new("C", "B", 2.0)];
        let index = EndpointIndex::build(&nodes, &edges);

        assert_eq!(index.len(), 3);
        assert_eq!(index.get(&NodeId::from("B")), Some(0));
        assert_eq!(index.get(&NodeId::from("A")), Some(1));
        assert_eq!(index.get(&NodeId::from("C")), Some(2));
        assert_eq!(index.incident(2), &[0, 1]);
        assert_eq!(index.endpoints(1), (2, 0));
    }

    #[test]
    fn test_self_loop_listed_once() {
        let nodes = vec![Node::new(1_i64)];
        let edges = vec![Edge::new(1_i64, 1_i64, 0.5)];
        let index = EndpointIndex::build(&nodes, &edges);

        assert_eq!(index.incident(0), &[0]);
        assert!(index.incident(5).is_empty());
    }
}
